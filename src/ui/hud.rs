use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::GameState;
use crate::renderer::food_color;

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";

/// Values displayed by the HUD that do not live in the game state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub muted: bool,
}

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: HudInfo) -> Rect {
    let [play_area, score_area, status_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(top_info_line(state))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        inset_horizontal(score_area, HUD_MARGIN_X),
    );

    frame.render_widget(
        Paragraph::new(bottom_info_line(state, info))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray)),
        inset_horizontal(status_area, HUD_MARGIN_X),
    );

    play_area
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

// Length │ Obstacles │ Score │ Hi
fn top_info_line(state: &GameState) -> Line<'static> {
    let value = Style::default().fg(Color::White);
    let record = state.score > 0 && state.score >= state.high_score;
    let score_style = if record {
        Style::default().fg(Color::Green)
    } else {
        value
    };

    Line::from(vec![
        Span::raw("Length: "),
        Span::styled(state.snake.len().to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw("Obstacles: "),
        Span::styled(
            format!(
                "{}/{}",
                state.obstacles.active_len(),
                state.obstacles.layout().len()
            ),
            Style::default().fg(Color::LightRed),
        ),
        Span::raw(SEPARATOR),
        Span::raw("Score: "),
        Span::styled(state.score.to_string(), score_style),
        Span::raw(SEPARATOR),
        Span::raw("Hi: "),
        Span::styled(state.high_score.max(state.score).to_string(), value),
    ])
}

// {width}x{height} │ apple: n │ pear: n │ peach: n [│ muted]
fn bottom_info_line(state: &GameState, info: HudInfo) -> Line<'static> {
    let bounds = state.bounds();
    let mut spans = vec![Span::raw(format!("{}x{}", bounds.width, bounds.height))];

    for (kind, count) in state.fruit_counter.iter() {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!("{}: ", kind.label()),
            Style::default().fg(food_color(kind)),
        ));
        spans.push(Span::styled(count.to_string(), Style::default().fg(Color::White)));
    }

    if info.muted {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::raw("muted"));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::food::{Food, FoodKind};
    use crate::game::GameState;
    use crate::grid::{GridSize, Position};

    use super::{bottom_info_line, top_info_line, HudInfo};

    fn state() -> GameState {
        let config = GameConfig::new(
            GridSize {
                width: 7,
                height: 5,
            },
            vec![Position::new(3, 3)],
        )
        .expect("valid config");
        GameState::with_food(&config, Food::new(Position::new(2, 2), FoodKind::Peach), 12)
    }

    fn text(line: &ratatui::text::Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn top_line_shows_score_and_high_score() {
        let mut state = state();
        state.score = 5;

        assert_eq!(
            text(&top_info_line(&state)),
            "Length: 1 │ Obstacles: 1/1 │ Score: 5 │ Hi: 12"
        );
    }

    #[test]
    fn bottom_line_lists_fruit_counts() {
        let mut state = state();
        state.fruit_counter.record(FoodKind::Pear);

        assert_eq!(
            text(&bottom_info_line(&state, HudInfo { muted: true })),
            "7x5 │ apple: 0 │ pear: 1 │ peach: 0 │ muted"
        );
    }
}
