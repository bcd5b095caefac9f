mod alien;
mod bullet;
mod entity;
mod game_state;

// Re-export all public types
pub use alien::Alien;
pub use bullet::{Bullet, HOLSTER_Y, SPENT_Y};
pub use entity::Entity;
pub use game_state::GameState;
