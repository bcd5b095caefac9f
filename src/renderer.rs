use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Painter, Points, Shape},
    },
};

use crate::entities::{Alien, Bullet, Entity, GameState};
use crate::game::Game;
use crate::sprite::Sprite;

const STAR_COUNT: usize = 80;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Entity,
    pub bullet: &'a Bullet,
    pub aliens: &'a [Alien],
    pub score: u32,
    pub wave: u32,
    pub world_width: f32,
    pub world_height: f32,
    pub area: Rect,
}

impl<'a> RenderView<'a> {
    pub fn new(game: &'a Game, area: Rect) -> Self {
        Self {
            game_state: game.state(),
            player: &game.player,
            bullet: &game.bullet,
            aliens: &game.aliens,
            score: game.score(),
            wave: game.wave(),
            world_width: game.config().window_width,
            world_height: game.config().window_height,
            area,
        }
    }
}

/// Paints a sprite's solid pixels onto a canvas whose y axis points up
struct SpriteShape<'a> {
    sprite: &'a Sprite,
    x: f32,
    y: f32,
    world_height: f32,
}

impl<'a> SpriteShape<'a> {
    fn of(entity: &'a Entity, world_height: f32) -> Self {
        Self {
            sprite: &entity.sprite,
            x: entity.x,
            y: entity.y,
            world_height,
        }
    }
}

impl Shape for SpriteShape<'_> {
    fn draw(&self, painter: &mut Painter) {
        for (px, py, pixel) in self.sprite.opaque_pixels() {
            let x = f64::from(self.x) + f64::from(px);
            let y = f64::from(self.world_height) - (f64::from(self.y) + f64::from(py));
            if let Some((cx, cy)) = painter.get_point(x, y) {
                let [r, g, b, _] = pixel.0;
                painter.paint(cx, cy, Color::Rgb(r, g, b));
            }
        }
    }
}

/// Largest rect inside `area` with the world's aspect ratio, centered.
/// Terminal cells are taken to be twice as tall as they are wide.
pub fn fit_playfield(area: Rect, world_width: f32, world_height: f32) -> Rect {
    let (world_width, world_height) = (f64::from(world_width), f64::from(world_height));
    let mut height = area.height;
    let mut width = (2.0 * f64::from(height) * world_width / world_height) as u16;
    if width > area.width {
        width = area.width;
        height = (f64::from(width) * world_height / (2.0 * world_width)) as u16;
    }

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    /// Background star positions in world coordinates (y up)
    stars: Vec<(f64, f64)>,
}

impl GameRenderer {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        let mut rng = rand::rng();
        let stars = (0..STAR_COUNT)
            .map(|_| {
                (
                    rng.random_range(0.0..f64::from(world_width)),
                    rng.random_range(0.0..f64::from(world_height)),
                )
            })
            .collect();

        Self { stars }
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game_state {
            GameState::Playing => self.render_game(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
        }
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Top row is the header, the rest holds the playfield between two borders
        let body = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(1),
        };
        let playfield = fit_playfield(body, view.world_width, view.world_height);
        let outer = Rect {
            x: playfield.x - 1,
            width: playfield.width + 2,
            ..playfield
        };
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(block, outer);

        let world_height = view.world_height;
        let canvas = Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(Color::Black)
            .x_bounds([0.0, f64::from(view.world_width)])
            .y_bounds([0.0, f64::from(world_height)])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &self.stars,
                    color: Color::DarkGray,
                });
                ctx.layer();

                ctx.draw(&SpriteShape::of(view.player, world_height));
                if view.bullet.is_active() {
                    ctx.draw(&SpriteShape::of(&view.bullet.entity, world_height));
                }
                for alien in view.aliens {
                    ctx.draw(&SpriteShape::of(&alien.entity, world_height));
                }
            });
        if !playfield.is_empty() {
            frame.render_widget(canvas, playfield);
        }

        // Score in the bottom-right corner of the playfield
        let score = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", view.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let score_area = Rect {
            x: playfield.x,
            y: playfield.y + playfield.height.saturating_sub(1),
            width: playfield.width.saturating_sub(1),
            height: playfield.height.min(1),
        };
        frame.render_widget(
            Paragraph::new(score).alignment(Alignment::Right),
            score_area,
        );

        let header = Line::from(vec![
            Span::styled("Wave: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.wave),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Aliens: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.aliens.len()),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  [A/D/Arrows: Move] [Space: Fire] [Q: Quit]",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let header_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(header).centered(), header_area);
    }

    /// Renders the game over screen
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let mut game_over_text = vec![Line::from(""); (area.height / 2).saturating_sub(4) as usize];
        game_over_text.extend([
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║         GAME OVER         ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Reached wave {}", view.wave))
                .centered()
                .cyan(),
            Line::from(""),
            Line::from("Press Q to quit").centered().white(),
        ]);

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}
