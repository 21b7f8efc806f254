use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::effects::Splat;
use crate::entities::{Entity, EntityKind, Facing, Topping, Utensil};
use crate::world::{GameState, GameWorld};

/// Maps the 800x600 world (y up) onto a rectangle of terminal cells (y down)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// The viewport inside the bordered play-field for a full terminal area
    pub fn for_terminal(area: Rect) -> Self {
        Self::new(Block::default().borders(Borders::ALL).inner(area))
    }

    /// Cell containing a world point, or None when it is off screen
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if self.area.width == 0 || self.area.height == 0 {
            return None;
        }
        let column = (x / SCREEN_WIDTH * self.area.width as f32).floor();
        let row = ((SCREEN_HEIGHT - y) / SCREEN_HEIGHT * self.area.height as f32).floor();
        if column < 0.0
            || row < 0.0
            || column >= self.area.width as f32
            || row >= self.area.height as f32
        {
            return None;
        }
        Some((self.area.x + column as u16, self.area.y + row as u16))
    }

    /// World point at the center of a cell. Cells outside the viewport map
    /// past the world edges.
    pub fn to_world(&self, column: u16, row: u16) -> (f32, f32) {
        let width = self.area.width.max(1) as f32;
        let height = self.area.height.max(1) as f32;
        let column = column as f32 - self.area.x as f32 + 0.5;
        let row = row as f32 - self.area.y as f32 + 0.5;
        (
            column / width * SCREEN_WIDTH,
            SCREEN_HEIGHT - row / height * SCREEN_HEIGHT,
        )
    }
}

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub world: &'a GameWorld,
    pub splats: &'a [Splat],
    pub paused: bool,
    pub area: Rect,
    pub fps: u32,
    /// False when no audio device or clips were available
    pub sound: bool,
}

fn enemy_sprite(facing: Facing) -> &'static str {
    match facing {
        Facing::Left => "<@@]",
        Facing::Right => "[@@>",
    }
}

/// Spinning bullets cycle through four glyphs as their angle turns
fn spin_glyph(angle: f32) -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    let step = ((angle + 22.5) / 45.0) as usize;
    FRAMES[step % FRAMES.len()]
}

fn utensil_color(utensil: Utensil) -> Color {
    match utensil {
        Utensil::FryingPan => Color::DarkGray,
        Utensil::RollingPin => Color::Yellow,
        Utensil::Spoon => Color::White,
        Utensil::Knife => Color::Cyan,
    }
}

fn topping_glyph(topping: Topping) -> (char, Color) {
    match topping {
        Topping::Onion => ('o', Color::White),
        Topping::TopBun => ('n', Color::Yellow),
        Topping::Patty => ('=', Color::Red),
        Topping::TomatoPickle => ('*', Color::Green),
    }
}

/// Handles all rendering responsibilities for the game
#[derive(Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Draw the play-field, HUD and any overlay for the current state
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(block, area);

        let viewport = Viewport::for_terminal(area);
        self.render_world(frame.buffer_mut(), viewport, view);
        self.render_hud(frame, view);

        match view.world.game_state() {
            GameState::Playing if view.paused => self.render_paused(frame, area),
            GameState::Playing => {}
            GameState::GameOver => self.render_end(frame, view, "GAME OVER", Color::Red),
            GameState::Won => self.render_end(frame, view, "YOU WIN", Color::Green),
        }
    }

    /// Layer order: enemies, player bullets, enemy bullets, shields, player
    fn render_world(&self, buffer: &mut Buffer, viewport: Viewport, view: &RenderView) {
        let world = view.world;

        let enemy_style = Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD);
        let sprite = enemy_sprite(world.formation.facing());
        for enemy in &world.formation.enemies {
            put(buffer, viewport, enemy, sprite, enemy_style);
        }

        for bullet in &world.player_bullets {
            if let EntityKind::PlayerBullet(utensil) = bullet.kind {
                let glyph = spin_glyph(bullet.angle).to_string();
                put(buffer, viewport, bullet, &glyph, Style::default().fg(utensil_color(utensil)));
            }
        }

        for bullet in &world.enemy_bullets {
            if let EntityKind::EnemyBullet(topping) = bullet.kind {
                let (glyph, color) = topping_glyph(topping);
                put(buffer, viewport, bullet, &glyph.to_string(), Style::default().fg(color));
            }
        }

        let shield_style = Style::default().fg(Color::White);
        for block in &world.shields {
            put(buffer, viewport, block, "█", shield_style);
        }

        for splat in view.splats {
            if let Some((column, row)) = viewport.to_cell(splat.x, splat.y) {
                let color = if splat.lifetime > 4 {
                    Color::Yellow
                } else {
                    Color::Red
                };
                buffer.set_string(
                    column,
                    row,
                    splat.char.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
            }
        }

        put(
            buffer,
            viewport,
            &world.player,
            "\\o/",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let world = view.world;

        let mut spans = vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Wave: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.wave),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Burgers: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.formation.len()),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} ", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if !view.sound {
            spans.push(Span::styled(" Sound: off ", Style::default().fg(Color::DarkGray)));
        }
        let stats = Line::from(spans);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(stats), stats_area);

        let controls = Line::from(vec![Span::styled(
            " [Mouse/Arrows: Move] [Click/Space: Throw] [P: Pause] [Q: Quit] ",
            Style::default().fg(Color::DarkGray),
        )]);
        if area.height > 1 {
            let controls_area = Rect {
                x: area.x + 1,
                y: area.y + area.height - 1,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            frame.render_widget(Paragraph::new(controls).centered(), controls_area);
        }
    }

    fn render_paused(&self, frame: &mut Frame, area: Rect) {
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = centered_rect(area, 30, 6);
        frame.render_widget(Clear, pause_area);
        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Large banner over the frozen play-field
    fn render_end(&self, frame: &mut Frame, view: &RenderView, title: &str, color: Color) {
        let banner = format!("║      {title:<13}║");
        let end_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════╗").centered().fg(color),
            Line::from(banner).centered().fg(color).bold(),
            Line::from("╚═══════════════════╝").centered().fg(color),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.world.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Waves: {}", view.world.wave))
                .centered()
                .cyan()
                .bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        let end_area = centered_rect(view.area, 36, 12);
        frame.render_widget(Clear, end_area);
        frame.render_widget(
            Paragraph::new(end_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            end_area,
        );
    }
}

/// Write `text` centered on the entity's cell, clipped to the viewport
fn put(buffer: &mut Buffer, viewport: Viewport, entity: &Entity, text: &str, style: Style) {
    let Some((column, row)) = viewport.to_cell(entity.x, entity.y) else {
        return;
    };
    let half = (text.chars().count() / 2) as u16;
    let start = column.saturating_sub(half).max(viewport.area.x);
    let max_width = viewport.area.right().saturating_sub(start) as usize;
    buffer.set_stringn(start, row, text, max_width, style);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
