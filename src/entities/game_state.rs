#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Terminal: only a quit signal is handled from here
    GameOver,
}
