use std::rc::Rc;

use super::bullet::Bullet;
use super::entity::Entity;
use crate::sprite::Sprite;

#[derive(Debug, Clone)]
pub struct Alien {
    pub entity: Entity,
    /// Current patrol direction
    pub move_right: bool,
}

impl Alien {
    pub fn new(x: f32, y: f32, sprite: Rc<Sprite>, speed: f32) -> Self {
        Self {
            entity: Entity::new(x, y, sprite, speed),
            move_right: true,
        }
    }

    /// One frame of horizontal patrol. Vertical movement only happens
    /// through [`Alien::descend`] when the wave bounces.
    pub fn patrol(&mut self) {
        if self.move_right {
            self.entity.move_right();
        } else {
            self.entity.move_left();
        }
    }

    pub fn descend(&mut self, step: f32) {
        self.entity.y += step;
    }

    /// Pixel-perfect hit test against the bullet.
    ///
    /// Positions are rounded half-to-even before comparing masks, so an alien
    /// at x = 0.5 covers pixels 0..35.
    ///
    /// On a hit the bullet is parked off-screen so it can't score twice.
    /// Safe to call with an inactive bullet: it rests far outside the world.
    pub fn collide_bullet(&self, bullet: &mut Bullet) -> bool {
        let offset = (
            (bullet.x() - self.entity.x.round_ties_even()).round_ties_even() as i32,
            (bullet.y() - self.entity.y.round_ties_even()).round_ties_even() as i32,
        );
        let hit = self
            .entity
            .mask()
            .overlap(bullet.entity.mask(), offset)
            .is_some();

        if hit {
            bullet.spend();
        }
        hit
    }

    pub fn x(&self) -> f32 {
        self.entity.x
    }

    pub fn y(&self) -> f32 {
        self.entity.y
    }
}
