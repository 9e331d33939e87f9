use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::food::FoodKind;
use crate::game::GameState;
use crate::grid::{GridSize, Position};
use crate::session::GameOverEvent;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::render_game_over_menu;

/// Terminal columns per grid cell, so cells render roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_SNAKE_HEAD: &str = "██";
const GLYPH_SNAKE_BODY: &str = "▓▓";
const GLYPH_FOOD: &str = "()";
const GLYPH_OBSTACLE: &str = "▒▒";
const GLYPH_EMPTY: &str = " ·";

/// Renders the full game frame from immutable state.
///
/// `game_over` is set while the game-over popup is being held.
pub fn render(
    frame: &mut Frame<'_>,
    state: &GameState,
    hud_info: HudInfo,
    game_over: Option<GameOverEvent>,
) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, hud_info);

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(Color::Gray));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_board(frame, inner, state.bounds());
    render_obstacles(frame, inner, state);
    render_food(frame, inner, state);
    render_snake(frame, inner, state);

    if let Some(event) = game_over {
        render_game_over_menu(frame, play_area, event);
    }
}

/// Display color for each fruit kind.
#[must_use]
pub fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Apple => Color::Red,
        FoodKind::Pear => Color::LightGreen,
        FoodKind::Peach => Color::LightYellow,
    }
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize) {
    let style = Style::new().fg(Color::DarkGray);
    let (columns, rows) = visible_cells(inner, bounds);
    let buffer = frame.buffer_mut();

    for row in 0..rows {
        for column in 0..columns {
            let x = inner.x + column * CELL_WIDTH;
            buffer.set_string(x, inner.y + row, GLYPH_EMPTY, style);
        }
    }
}

/// Number of grid columns and rows that fit inside `inner`.
fn visible_cells(inner: Rect, bounds: GridSize) -> (u16, u16) {
    (
        (inner.width / CELL_WIDTH).min(bounds.width),
        inner.height.min(bounds.height),
    )
}

fn render_obstacles(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let style = Style::new().fg(Color::LightRed).bg(Color::Red);
    let buffer = frame.buffer_mut();

    for obstacle in state.obstacles.active() {
        if let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *obstacle) {
            buffer.set_string(x, y, GLYPH_OBSTACLE, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food.position) else {
        return;
    };

    let style = Style::new()
        .fg(food_color(state.food.kind))
        .add_modifier(Modifier::BOLD);
    frame.buffer_mut().set_string(x, y, GLYPH_FOOD, style);
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when segments overlap.
    for (index, segment) in state.snake.segments().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(x, y, GLYPH_SNAKE_HEAD, Style::new().fg(Color::LightGreen));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
        }
    }
}

/// Maps a grid cell to the terminal column/row of its left half, clipping
/// cells that fall outside the visible play area.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::grid::{GridSize, Position};

    use super::{logical_to_terminal, visible_cells};

    const BOUNDS: GridSize = GridSize {
        width: 4,
        height: 3,
    };

    #[test]
    fn cells_are_two_columns_wide() {
        let inner = Rect::new(1, 1, 8, 3);

        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position::new(0, 0)),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, BOUNDS, Position::new(3, 2)),
            Some((7, 3))
        );
    }

    #[test]
    fn cells_outside_the_visible_area_are_clipped() {
        let inner = Rect::new(0, 0, 5, 2);

        assert_eq!(logical_to_terminal(inner, BOUNDS, Position::new(2, 0)), None);
        assert_eq!(logical_to_terminal(inner, BOUNDS, Position::new(0, 2)), None);
        assert_eq!(logical_to_terminal(inner, BOUNDS, Position::new(-1, 0)), None);
    }

    #[test]
    fn visible_cells_are_limited_by_the_smaller_of_grid_and_area() {
        assert_eq!(visible_cells(Rect::new(0, 0, 80, 24), BOUNDS), (4, 3));

        let huge = GridSize {
            width: u16::MAX,
            height: u16::MAX,
        };
        assert_eq!(visible_cells(Rect::new(1, 1, 81, 22), huge), (40, 22));
    }
}
