use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::session::GameOverEvent;

/// Draws the game-over screen as a centered popup over the fresh board.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, event: GameOverEvent) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let is_new_high = event.final_score > 0 && event.final_score == event.high_score;
    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Your score: {}", event.final_score)),
        Line::from(format!("High score: {}", event.high_score)).style(Style::default().fg(Color::Green)),
        Line::from(format!("The snake {}", event.cause.describe())),
        Line::from(if is_new_high { "New high score!" } else { "" }),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
