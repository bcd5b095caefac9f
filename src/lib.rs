// Library exports for the binary and for testing
pub use app::App;
pub use assets::Sprites;
pub use config::GameConfig;
pub use entities::{Alien, Bullet, Entity, GameState};
pub use game::{Controls, FrameReport, Game};
pub use sprite::{Mask, Sprite};

pub mod app;
pub mod assets;
#[cfg(feature = "audio")]
pub mod audio;
pub mod clock;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sprite;
