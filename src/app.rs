use color_eyre::Result;
use log::{debug, info};
use ratatui::{Terminal, backend::Backend};

#[cfg(feature = "audio")]
use crate::audio::AudioManager;
use crate::assets::Sprites;
use crate::clock::{self, FrameClock};
use crate::config::GameConfig;
use crate::entities::GameState;
use crate::game::{FrameReport, Game};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};

/// The main application: owns the game and drives it from the terminal.
pub struct App {
    running: bool,
    game: Game,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    clock: FrameClock,
    #[cfg(feature = "audio")]
    audio_manager: Option<AudioManager>,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// `reports_releases` tells the input layer whether the terminal sends
    /// key release events (keyboard enhancement).
    pub fn new(config: GameConfig, sprites: Sprites, reports_releases: bool) -> Self {
        let renderer = GameRenderer::new(config.window_width, config.window_height);

        #[cfg(feature = "audio")]
        let audio_manager = AudioManager::new(std::path::Path::new("sounds"))
            .map_err(|err| log::warn!("Continuing without audio: {}", err))
            .ok();

        Self {
            running: true,
            game: Game::new(config, sprites),
            input_manager: InputManager::new(reports_releases),
            renderer,
            clock: FrameClock::new(),
            #[cfg(feature = "audio")]
            audio_manager,
        }
    }

    /// Run the application's main loop until the player quits from the
    /// game over screen.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting game loop at {} FPS", self.game.config().fps);

        let fps = self.game.config().fps;
        let budget = clock::frame_budget(fps);
        while self.running {
            self.input_manager.poll_events()?;
            self.update();

            terminal.draw(|frame| {
                let view = RenderView::new(&self.game, frame.area());
                self.renderer.render(frame, &view);
            })?;

            let frame_time = self.clock.tick(fps);
            if !budget.is_zero() && frame_time > budget * 2 {
                debug!(
                    "Slow frame {}: {:.1}ms",
                    self.game.frame_count(),
                    frame_time.as_secs_f64() * 1000.0
                );
            }
        }

        info!(
            "Exiting after {} frames with score {}",
            self.game.frame_count(),
            self.game.score()
        );
        Ok(())
    }

    /// One frame of game logic. A quit arriving mid-game still lets this
    /// frame's step run before the game ends.
    fn update(&mut self) {
        let was_playing = self.game.state() == GameState::Playing;
        if was_playing {
            let controls = self.input_manager.controls();
            let report = self.game.step(&controls);
            self.play_sounds(&report);
        }
        self.process_actions(was_playing);
    }

    /// The quit signal ends a running game; on the game over screen it exits.
    fn process_actions(&mut self, was_playing: bool) {
        for action in self.input_manager.actions() {
            match action {
                InputAction::Quit => {
                    if was_playing {
                        self.game.quit();
                    } else {
                        self.running = false;
                    }
                }
            }
        }
    }

    #[cfg(feature = "audio")]
    fn play_sounds(&self, report: &FrameReport) {
        let Some(audio) = &self.audio_manager else {
            return;
        };
        if report.fired {
            audio.play_fire_sound();
        }
        if report.hits > 0 {
            audio.play_hit_sound();
        }
    }

    #[cfg(not(feature = "audio"))]
    fn play_sounds(&self, _report: &FrameReport) {}
}
