use std::path::PathBuf;

/// Gameplay and presentation constants.
///
/// Everything is measured in logical pixels of the fixed-size game world,
/// independent of the terminal the world is drawn into.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Target frame rate of the main loop
    pub fps: u32,

    pub player_speed: f32,
    /// Distance from the bottom of the world to the player's top edge
    pub player_bottom_margin: f32,
    /// Horizontal offset from the player's x to where the bullet spawns
    pub muzzle_offset: f32,
    /// Keep the player inside the world horizontally
    pub clamp_player: bool,

    pub bullet_speed: f32,

    pub initial_alien_speed: f32,
    /// Added to the alien speed every time a wave is cleared
    pub alien_speed_increment: f32,
    pub alien_columns: u32,
    pub alien_rows: u32,
    pub alien_spacing_x: f32,
    pub alien_spacing_y: f32,
    /// How far the whole wave drops when it bounces off the left edge
    pub descent_step: f32,
    pub points_per_hit: u32,

    /// Sprite sizes (width, height) after scaling
    pub alien_size: (u32, u32),
    pub player_size: (u32, u32),
    pub bullet_size: (u32, u32),
    /// Directory holding `alien.png`, `player.png` and `bullet.png`
    pub asset_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 500.0,
            window_height: 600.0,
            fps: 60,
            player_speed: 2.0,
            player_bottom_margin: 50.0,
            muzzle_offset: 21.0,
            clamp_player: false,
            bullet_speed: 5.0,
            initial_alien_speed: 0.5,
            alien_speed_increment: 0.5,
            alien_columns: 9,
            alien_rows: 5,
            alien_spacing_x: 50.0,
            alien_spacing_y: 40.0,
            descent_step: 8.0,
            points_per_hit: 10,
            alien_size: (35, 25),
            player_size: (42, 26),
            bullet_size: (6, 12),
            asset_dir: PathBuf::from("images"),
        }
    }
}

impl GameConfig {
    /// Number of aliens in a full wave
    pub fn wave_size(&self) -> usize {
        (self.alien_columns * self.alien_rows) as usize
    }

    /// Aliens with x beyond this have reached the right edge
    pub fn right_edge(&self) -> f32 {
        self.window_width - self.alien_size.0 as f32
    }

    /// Where the player starts: horizontally centered near the bottom
    pub fn player_start(&self) -> (f32, f32) {
        (
            (self.window_width / 2.0).floor(),
            self.window_height - self.player_bottom_margin,
        )
    }
}
