use std::path::Path;
use std::rc::Rc;

use color_eyre::{Result, eyre::WrapErr};
use image::{Rgba, imageops::FilterType};
use log::{debug, info};

use crate::config::GameConfig;
use crate::sprite::Sprite;

/// The three sprites the game draws, shared by every entity of a kind
#[derive(Debug, Clone)]
pub struct Sprites {
    pub alien: Rc<Sprite>,
    pub player: Rc<Sprite>,
    pub bullet: Rc<Sprite>,
}

impl Sprites {
    /// Loads `alien.png`, `player.png` and `bullet.png` from the configured
    /// asset directory and scales them to their configured sizes.
    pub fn load(config: &GameConfig) -> Result<Self> {
        let dir = &config.asset_dir;
        info!("Loading sprites from {}", dir.display());

        Ok(Self {
            alien: Rc::new(load_sprite(&dir.join("alien.png"), config.alien_size)?),
            player: Rc::new(load_sprite(&dir.join("player.png"), config.player_size)?),
            bullet: Rc::new(load_sprite(&dir.join("bullet.png"), config.bullet_size)?),
        })
    }

    /// Plain coloured rectangles of the configured sizes
    pub fn solid(config: &GameConfig) -> Self {
        let (aw, ah) = config.alien_size;
        let (pw, ph) = config.player_size;
        let (bw, bh) = config.bullet_size;

        Self {
            alien: Rc::new(Sprite::solid(aw, ah, Rgba([220, 40, 40, 255]))),
            player: Rc::new(Sprite::solid(pw, ph, Rgba([40, 220, 40, 255]))),
            bullet: Rc::new(Sprite::solid(bw, bh, Rgba([240, 240, 60, 255]))),
        }
    }
}

fn load_sprite(path: &Path, (width, height): (u32, u32)) -> Result<Sprite> {
    let image = image::open(path)
        .wrap_err_with(|| format!("failed to load sprite {}", path.display()))?;
    debug!(
        "{}: {}x{} -> {}x{}",
        path.display(),
        image.width(),
        image.height(),
        width,
        height
    );

    let scaled = image::imageops::resize(&image.to_rgba8(), width, height, FilterType::Nearest);
    Ok(Sprite::new(scaled))
}
