use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::grid::{GridSize, Position};

/// Upper bound on the body capacity reserved when a game starts.
pub const MAX_RESERVED_SEGMENTS: usize = 4096;

fn initial_capacity(bounds: GridSize) -> usize {
    (bounds.total_cells() + 1).min(MAX_RESERVED_SEGMENTS)
}

/// Snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`, reserving room for growth up to
    /// the grid size or [`MAX_RESERVED_SEGMENTS`], whichever is smaller.
    #[must_use]
    pub fn new(start: Position, bounds: GridSize) -> Self {
        let mut body = VecDeque::with_capacity(initial_capacity(bounds));
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Inserts a new head segment.
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes the tail segment, keeping at least the head.
    pub fn trim_tail(&mut self) -> Option<Position> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> vec_deque::Iter<'_, Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{GridSize, Position};

    use super::{initial_capacity, Snake, MAX_RESERVED_SEGMENTS};

    const BOUNDS: GridSize = GridSize {
        width: 40,
        height: 20,
    };

    #[test]
    fn push_then_trim_slides_the_body() {
        let mut snake = Snake::from_segments(vec![Position::new(2, 0), Position::new(1, 0)]);

        snake.push_head(Position::new(3, 0));
        let removed = snake.trim_tail();

        assert_eq!(removed, Some(Position::new(1, 0)));
        assert_eq!(snake.head(), Position::new(3, 0));
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Position::new(3, 0), Position::new(2, 0)]
        );
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn trim_never_removes_the_last_segment() {
        let mut snake = Snake::new(Position::new(5, 5), BOUNDS);

        assert_eq!(snake.trim_tail(), None);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn segments_iterate_back_to_front_with_indices() {
        let snake = Snake::from_segments(vec![
            Position::new(3, 0),
            Position::new(2, 0),
            Position::new(1, 0),
        ]);

        let reversed: Vec<_> = snake.segments().enumerate().rev().collect();

        assert_eq!(reversed[0], (2, &Position::new(1, 0)));
        assert_eq!(reversed[2], (0, &Position::new(3, 0)));
    }

    #[test]
    fn reserved_capacity_is_capped_on_huge_grids() {
        let huge = GridSize {
            width: u16::MAX,
            height: u16::MAX,
        };

        assert_eq!(initial_capacity(huge), MAX_RESERVED_SEGMENTS);
        assert_eq!(initial_capacity(BOUNDS), BOUNDS.total_cells() + 1);

        let snake = Snake::new(Position::new(0, 0), huge);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let straight = Snake::from_segments(vec![Position::new(1, 1), Position::new(1, 2)]);
        let looped = Snake::from_segments(vec![
            Position::new(1, 2),
            Position::new(1, 1),
            Position::new(1, 2),
        ]);

        assert!(!straight.head_overlaps_body());
        assert!(looped.head_overlaps_body());
    }

    #[test]
    fn occupies_checks_every_segment() {
        let snake = Snake::from_segments(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);

        assert!(snake.occupies(Position::new(2, 0)));
        assert!(!snake.occupies(Position::new(3, 0)));
    }
}
