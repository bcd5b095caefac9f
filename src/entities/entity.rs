use std::rc::Rc;

use crate::sprite::{Mask, Sprite};

/// Position, speed and sprite shared by everything that moves on screen
#[derive(Debug, Clone)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    /// Pixels per frame
    pub speed: f32,
    pub sprite: Rc<Sprite>,
}

impl Entity {
    pub fn new(x: f32, y: f32, sprite: Rc<Sprite>, speed: f32) -> Self {
        Self { x, y, sprite, speed }
    }

    pub fn mask(&self) -> &Mask {
        self.sprite.mask()
    }

    pub fn get_width(&self) -> u32 {
        self.sprite.width()
    }

    #[cfg(test)]
    pub fn get_height(&self) -> u32 {
        self.sprite.height()
    }

    pub fn move_left(&mut self) {
        self.x -= self.speed;
    }

    pub fn move_right(&mut self) {
        self.x += self.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_entity_moves_by_speed() {
        let sprite = Rc::new(Sprite::solid(42, 26, Rgba([0, 255, 0, 255])));
        let mut player = Entity::new(250.0, 550.0, sprite, 2.0);

        player.move_left();
        assert_eq!(player.x, 248.0);
        player.move_right();
        player.move_right();
        assert_eq!(player.x, 252.0);
        assert_eq!(player.y, 550.0);
        assert_eq!((player.get_width(), player.get_height()), (42, 26));
    }
}
