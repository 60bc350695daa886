use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine, Points, Rectangle},
    },
};

use crate::scene::PlayState;

/// Stars at or above this brightness are drawn in the brighter colour
const BRIGHT_STAR: u8 = 200;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub state: &'a PlayState,
    pub title: &'a str,
    /// Colour around the playfield
    pub background: Color,
    pub fps: u32,
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = frame.area();

        // Page background behind everything
        frame.render_widget(
            Block::default().style(Style::default().bg(view.background)),
            area,
        );

        let playfield = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(1),
        };
        self.render_playfield(frame, playfield, view);
        self.render_status(frame, area, view);
    }

    /// Draws the world into a canvas scaled to the viewport size
    fn render_playfield(&self, frame: &mut Frame, area: Rect, view: &RenderView) {
        let state = view.state;
        let width = f64::from(state.width);
        let height = f64::from(state.height);

        // Canvas y grows upward, world y grows downward
        let flip = |y: f32| height - f64::from(y);

        let (bright, dim): (Vec<_>, Vec<_>) = state
            .starfield
            .visible_stars(state.width, state.height)
            .into_iter()
            .partition(|&(_, _, brightness)| brightness >= BRIGHT_STAR);
        let bright: Vec<(f64, f64)> = bright
            .into_iter()
            .map(|(x, y, _)| (f64::from(x), flip(y)))
            .collect();
        let dim: Vec<(f64, f64)> = dim
            .into_iter()
            .map(|(x, y, _)| (f64::from(x), flip(y)))
            .collect();

        let corners = state.spinner.corners();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(Span::styled(
                        format!(" {} ", view.title),
                        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
                    )),
            )
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &dim,
                    color: Color::DarkGray,
                });
                ctx.draw(&Points {
                    coords: &bright,
                    color: Color::White,
                });
                ctx.layer();

                for enemy in &state.enemies {
                    let bounds = enemy.bounds();
                    ctx.draw(&Rectangle {
                        x: f64::from(bounds.x),
                        y: flip(bounds.bottom()),
                        width: f64::from(bounds.width),
                        height: f64::from(bounds.height),
                        color: Color::Green,
                    });
                }

                for (i, &(x1, y1)) in corners.iter().enumerate() {
                    let (x2, y2) = corners[(i + 1) % corners.len()];
                    ctx.draw(&CanvasLine {
                        x1: f64::from(x1),
                        y1: flip(y1),
                        x2: f64::from(x2),
                        y2: flip(y2),
                        color: Color::Red,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }

    /// Controls hint and frame stats on the bottom row
    fn render_status(&self, frame: &mut Frame, area: Rect, view: &RenderView) {
        let firing = if view.state.is_firing() {
            Span::styled(
                "FIRING",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("ready", Style::default().fg(Color::DarkGray))
        };

        let status = Line::from(vec![
            Span::styled(
                "[Left/Right: Spin] [F: Fire] [Q: Quit]  ",
                Style::default().fg(Color::Black),
            ),
            firing,
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            ),
        ]);

        let status_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(status).centered(), status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::entities::{Star, StarTile};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(state: &PlayState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let config = GameConfig::default();
        terminal
            .draw(|frame| {
                let view = RenderView {
                    state,
                    title: &config.title,
                    background: config.background,
                    fps: 60,
                };
                GameRenderer::new().render(frame, &view);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_title_and_controls() {
        let tile = StarTile::new(
            10,
            10,
            vec![Star {
                x: 3,
                y: 3,
                brightness: 255,
            }],
        );
        let state = PlayState::new(&GameConfig::default(), tile);
        let text = render_to_text(&state);
        assert!(text.contains("Rocket Patrol Remake"));
        assert!(text.contains("F: Fire"));
        assert!(text.contains("ready"));
    }

    #[test]
    fn test_render_marks_firing() {
        let mut state = PlayState::new(&GameConfig::default(), StarTile::new(0, 0, Vec::new()));
        state.spinner.try_fire();
        let text = render_to_text(&state);
        assert!(text.contains("FIRING"));
    }
}
