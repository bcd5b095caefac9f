use log::info;

use crate::assets::Sprites;
use crate::config::GameConfig;
use crate::entities::{Alien, Bullet, Entity, GameState};

/// Snapshot of the keys held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// What happened during one call to [`Game::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub fired: bool,
    pub hits: u32,
    pub wave_cleared: bool,
}

/// Complete game world and per-frame rules. No I/O happens here.
pub struct Game {
    config: GameConfig,
    sprites: Sprites,
    pub player: Entity,
    pub bullet: Bullet,
    /// Live aliens, in spawn order
    pub aliens: Vec<Alien>,
    score: u32,
    alien_speed: f32,
    wave: u32,
    state: GameState,
    frame_count: u64,
}

impl Game {
    pub fn new(config: GameConfig, sprites: Sprites) -> Self {
        let (player_x, player_y) = config.player_start();
        let player = Entity::new(
            player_x,
            player_y,
            sprites.player.clone(),
            config.player_speed,
        );
        let bullet = Bullet::holstered(sprites.bullet.clone(), config.bullet_speed);
        let alien_speed = config.initial_alien_speed;

        let mut game = Self {
            config,
            sprites,
            player,
            bullet,
            aliens: Vec::new(),
            score: 0,
            alien_speed,
            wave: 1,
            state: GameState::Playing,
            frame_count: 0,
        };
        game.aliens = game.spawn_wave();
        game
    }

    /// A full grid of aliens at the origin, moving at the current alien speed
    pub fn spawn_wave(&self) -> Vec<Alien> {
        let mut aliens = Vec::with_capacity(self.config.wave_size());
        for row in 0..self.config.alien_rows {
            let y = row as f32 * self.config.alien_spacing_y;
            for column in 0..self.config.alien_columns {
                let x = column as f32 * self.config.alien_spacing_x;
                aliens.push(Alien::new(x, y, self.sprites.alien.clone(), self.alien_speed));
            }
        }
        aliens
    }

    /// Advances the world by one frame. Does nothing once the game is over.
    pub fn step(&mut self, controls: &Controls) -> FrameReport {
        let mut report = FrameReport::default();
        if self.state == GameState::GameOver {
            return report;
        }

        self.frame_count += 1;
        report.fired = self.handle_input(controls);
        self.bullet.advance(self.config.window_height);
        self.handle_aliens(&mut report);
        report
    }

    /// Applies held keys to the player and bullet. Returns whether a shot was fired.
    pub fn handle_input(&mut self, controls: &Controls) -> bool {
        let mut fired = false;
        if controls.fire {
            fired = self.bullet.fire(
                self.player.x + self.config.muzzle_offset,
                self.player.y,
            );
        }

        // Left wins when both are held
        if controls.left {
            self.player.move_left();
        } else if controls.right {
            self.player.move_right();
        }

        if self.config.clamp_player {
            let max_x = self.config.window_width - self.player.get_width() as f32;
            self.player.x = self.player.x.clamp(0.0, max_x);
        }

        fired
    }

    fn handle_aliens(&mut self, report: &mut FrameReport) {
        // Pass 1: collide, patrol and check for invasion. Hits are only marked
        // here and removed afterwards so no alien is skipped.
        let mut hit = vec![false; self.aliens.len()];
        for (idx, alien) in self.aliens.iter_mut().enumerate() {
            if alien.collide_bullet(&mut self.bullet) {
                hit[idx] = true;
                self.score += self.config.points_per_hit;
                report.hits += 1;
            }

            alien.patrol();

            if alien.y() >= self.player.y && self.state != GameState::GameOver {
                info!("Aliens reached the player on frame {}", self.frame_count);
                self.state = GameState::GameOver;
            }
        }

        if report.hits > 0 {
            let mut flags = hit.into_iter();
            self.aliens.retain(|_| !flags.next().unwrap_or(false));
        }

        // Pass 2: bounce the whole wave using post-move positions
        self.bounce_wave();

        if self.aliens.is_empty() {
            self.next_wave();
            report.wave_cleared = true;
        }

        if self.state == GameState::GameOver {
            info!("Game over: score {} on wave {}", self.score, self.wave);
        }
    }

    /// Turns the wave around at the window edges. The left edge also drops
    /// the wave one step closer to the player.
    fn bounce_wave(&mut self) {
        let right_edge = self.config.right_edge();

        if self.aliens.iter().any(|a| a.x() < 0.0) {
            for alien in &mut self.aliens {
                alien.move_right = true;
                alien.descend(self.config.descent_step);
            }
        } else if self.aliens.iter().any(|a| a.x() > right_edge) {
            for alien in &mut self.aliens {
                alien.move_right = false;
            }
        }
    }

    fn next_wave(&mut self) {
        self.alien_speed += self.config.alien_speed_increment;
        self.wave += 1;
        self.aliens = self.spawn_wave();
        info!(
            "Wave cleared, starting wave {} at speed {}",
            self.wave, self.alien_speed
        );
    }

    /// External quit signal
    pub fn quit(&mut self) {
        if self.state == GameState::Playing {
            info!("Quit requested with score {}", self.score);
        }
        self.state = GameState::GameOver;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn alien_speed(&self) -> f32 {
        self.alien_speed
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SPENT_Y;

    const FIRE: Controls = Controls {
        left: false,
        right: false,
        fire: true,
    };

    fn new_game() -> Game {
        let config = GameConfig::default();
        let sprites = Sprites::solid(&config);
        Game::new(config, sprites)
    }

    #[test]
    fn test_new_game() {
        let game = new_game();
        assert_eq!(game.aliens.len(), 45);
        assert_eq!(game.score(), 0);
        assert_eq!(game.alien_speed(), 0.5);
        assert_eq!(game.wave(), 1);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!((game.player.x, game.player.y), (250.0, 550.0));
        assert!(!game.bullet.is_active());
    }

    #[test]
    fn test_wave_grid_layout() {
        let game = new_game();
        let first = &game.aliens[0];
        let last = &game.aliens[44];
        assert_eq!((first.x(), first.y()), (0.0, 0.0));
        assert_eq!((game.aliens[1].x(), game.aliens[1].y()), (50.0, 0.0));
        assert_eq!((game.aliens[9].x(), game.aliens[9].y()), (0.0, 40.0));
        assert_eq!((last.x(), last.y()), (400.0, 160.0));
        assert!(game.aliens.iter().all(|a| a.move_right));
    }

    #[test]
    fn test_fire_spawns_bullet_at_player() {
        let mut game = new_game();
        assert!(game.handle_input(&FIRE));
        assert_eq!((game.bullet.x(), game.bullet.y()), (271.0, 550.0));
    }

    #[test]
    fn test_fire_while_active_is_ignored() {
        let mut game = new_game();
        let report = game.step(&FIRE);
        assert!(report.fired);
        assert!(game.bullet.is_active());
        assert_eq!(game.bullet.y(), 545.0);

        let report = game.step(&FIRE);
        assert!(!report.fired);
        assert_eq!(game.bullet.y(), 540.0);
    }

    #[test]
    fn test_left_takes_priority_over_right() {
        let mut game = new_game();
        game.handle_input(&Controls {
            left: true,
            right: true,
            fire: false,
        });
        assert_eq!(game.player.x, 248.0);

        game.handle_input(&Controls {
            left: false,
            right: true,
            fire: false,
        });
        assert_eq!(game.player.x, 250.0);
    }

    #[test]
    fn test_player_is_not_clamped_by_default() {
        let mut game = new_game();
        game.player.x = 0.0;
        game.handle_input(&Controls {
            left: true,
            ..Controls::default()
        });
        assert_eq!(game.player.x, -2.0);
    }

    #[test]
    fn test_clamped_player_stays_in_window() {
        let config = GameConfig {
            clamp_player: true,
            ..GameConfig::default()
        };
        let sprites = Sprites::solid(&config);
        let mut game = Game::new(config, sprites);

        game.player.x = 1.0;
        game.handle_input(&Controls {
            left: true,
            ..Controls::default()
        });
        assert_eq!(game.player.x, 0.0);

        game.player.x = 457.0;
        game.handle_input(&Controls {
            right: true,
            ..Controls::default()
        });
        assert_eq!(game.player.x, 458.0);
    }

    #[test]
    fn test_hit_scores_and_removes_alien() {
        let mut game = new_game();
        // After its own move the bullet sits 10px in and 5px down the last alien
        game.bullet.set_pos(410.0, 170.0);

        let report = game.step(&Controls::default());
        assert_eq!(report.hits, 1);
        assert_eq!(game.score(), 10);
        assert_eq!(game.aliens.len(), 44);
        assert_eq!(game.bullet.y(), SPENT_Y);
    }

    #[test]
    fn test_one_hit_per_bullet_pass() {
        let mut game = new_game();
        // Stack a second alien directly on top of the first
        let twin = game.aliens[0].clone();
        game.aliens.insert(1, twin);
        game.bullet.set_pos(10.0, 15.0);

        let report = game.step(&Controls::default());
        assert_eq!(report.hits, 1);
        assert_eq!(game.score(), 10);
        assert_eq!(game.aliens.len(), 45);
    }

    #[test]
    fn test_left_edge_flips_and_descends() {
        let mut game = new_game();
        for alien in &mut game.aliens {
            alien.move_right = false;
        }
        // Will be at -0.5 after patrol
        game.aliens[0].entity.x = 0.0;

        game.step(&Controls::default());
        assert!(game.aliens.iter().all(|a| a.move_right));
        assert_eq!(game.aliens[0].y(), 8.0);
        assert_eq!(game.aliens[44].y(), 168.0);
    }

    #[test]
    fn test_right_edge_flips_without_descent() {
        let mut game = new_game();
        game.aliens[44].entity.x = 465.0;

        game.step(&Controls::default());
        assert!(game.aliens.iter().all(|a| !a.move_right));
        assert_eq!(game.aliens[0].y(), 0.0);
        assert_eq!(game.aliens[44].y(), 160.0);
    }

    #[test]
    fn test_exactly_at_right_edge_keeps_direction() {
        let mut game = new_game();
        game.aliens[44].entity.x = 464.5;

        game.step(&Controls::default());
        assert_eq!(game.aliens[44].x(), 465.0);
        assert!(game.aliens.iter().all(|a| a.move_right));
    }

    #[test]
    fn test_clearing_wave_spawns_faster_wave() {
        let mut game = new_game();
        game.aliens.truncate(1);
        let x = game.aliens[0].x();
        game.bullet.set_pos(x + 10.5, 10.0);

        let report = game.step(&Controls::default());
        assert!(report.wave_cleared);
        assert_eq!(game.score(), 10);
        assert_eq!(game.aliens.len(), 45);
        assert_eq!(game.alien_speed(), 1.0);
        assert_eq!(game.wave(), 2);
        assert!(game.aliens.iter().all(|a| a.entity.speed == 1.0));
        assert_eq!((game.aliens[0].x(), game.aliens[0].y()), (0.0, 0.0));
    }

    #[test]
    fn test_alien_reaching_player_ends_game() {
        let mut game = new_game();
        game.aliens[3].entity.y = 550.0;

        game.step(&Controls::default());
        assert!(game.is_over());

        // Terminal: further steps change nothing
        let before = game.aliens[0].x();
        let report = game.step(&FIRE);
        assert_eq!(report, FrameReport::default());
        assert_eq!(game.aliens[0].x(), before);
        assert!(game.is_over());
    }

    #[test]
    fn test_alien_above_player_keeps_playing() {
        let mut game = new_game();
        game.aliens[3].entity.y = 549.0;
        game.step(&Controls::default());
        assert!(!game.is_over());
    }

    #[test]
    fn test_quit_ends_game() {
        let mut game = new_game();
        game.quit();
        assert_eq!(game.state(), GameState::GameOver);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_score_is_ten_per_kill(targets in prop::collection::vec(0usize..45, 1..10)) {
                let mut game = new_game();
                let mut kills = 0;
                for target in targets {
                    let idx = target % game.aliens.len();
                    let alien = &game.aliens[idx];
                    let (x, y) = (alien.x().round_ties_even() + 10.0, alien.y() + 5.0);
                    game.bullet.set_pos(x, y);

                    let before = game.aliens.len();
                    let report = game.step(&Controls::default());
                    prop_assert_eq!(report.hits, 1);
                    prop_assert_eq!(game.aliens.len(), before - 1);
                    kills += 1;
                }
                prop_assert_eq!(game.score(), kills * 10);
            }

            #[test]
            fn test_aliens_only_move_horizontally_between_bounces(frames in 1usize..120) {
                let mut game = new_game();
                for _ in 0..frames {
                    game.step(&Controls::default());
                }
                // The grid starts at x = 0 moving right and needs 131 frames to reach the right edge
                let speed = game.alien_speed();
                for (idx, alien) in game.aliens.iter().enumerate() {
                    let column = (idx % 9) as f32;
                    let row = (idx / 9) as f32;
                    prop_assert_eq!(alien.x(), column * 50.0 + speed * frames as f32);
                    prop_assert_eq!(alien.y(), row * 40.0);
                }
            }
        }
    }
}
