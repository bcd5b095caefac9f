use std::rc::Rc;

use super::entity::Entity;
use crate::sprite::Sprite;

/// Where the bullet waits before the first shot
pub const HOLSTER_Y: f32 = -1000.0;
/// Where a bullet is parked after hitting an alien, above the visible area
pub const SPENT_Y: f32 = -20.0;

/// The player's one and only bullet. It is never destroyed, only moved.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub entity: Entity,
    /// Inside the visible vertical range as of the last `advance`
    pub active: bool,
}

impl Bullet {
    pub fn new(x: f32, y: f32, sprite: Rc<Sprite>, speed: f32) -> Self {
        Self {
            entity: Entity::new(x, y, sprite, speed),
            active: false,
        }
    }

    /// A bullet sitting far above the world, ready to be fired
    pub fn holstered(sprite: Rc<Sprite>, speed: f32) -> Self {
        Self::new(0.0, HOLSTER_Y, sprite, speed)
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.entity.x = x;
        self.entity.y = y;
    }

    /// Fires from (x, y) unless a shot is already in flight.
    /// Returns whether the bullet was repositioned.
    pub fn fire(&mut self, x: f32, y: f32) -> bool {
        if self.active {
            return false;
        }
        self.set_pos(x, y);
        true
    }

    /// Moves the bullet up one frame.
    ///
    /// `active` is decided from the position *before* the move, so the flag
    /// lags the position by one frame at both edges of the window.
    pub fn advance(&mut self, window_height: f32) {
        self.active = self.entity.y > 0.0 && self.entity.y < window_height;
        self.entity.y -= self.entity.speed;
    }

    /// Parks the bullet above the window so it can't hit anything else
    pub fn spend(&mut self) {
        self.entity.y = SPENT_Y;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn x(&self) -> f32 {
        self.entity.x
    }

    pub fn y(&self) -> f32 {
        self.entity.y
    }
}
