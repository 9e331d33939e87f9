use std::sync::Arc;

use crate::config::{INITIAL_ACTIVE_OBSTACLES, OBSTACLE_UNLOCK_INTERVAL};
use crate::grid::Position;

/// Configured obstacle layout plus the prefix of it currently in play.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ObstacleSet {
    layout: Arc<[Position]>,
    active: usize,
}

impl ObstacleSet {
    /// Starts a game with the first few configured obstacles active.
    #[must_use]
    pub fn new(layout: Arc<[Position]>) -> Self {
        let active = layout.len().min(INITIAL_ACTIVE_OBSTACLES);
        Self { layout, active }
    }

    /// Obstacles currently in play, in configured order.
    #[must_use]
    pub fn active(&self) -> &[Position] {
        &self.layout[..self.active]
    }

    /// Full configured layout, including locked obstacles.
    #[must_use]
    pub fn layout(&self) -> &[Position] {
        &self.layout
    }

    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.active == self.layout.len()
    }

    #[must_use]
    pub fn contains_active(&self, position: Position) -> bool {
        self.active().contains(&position)
    }

    /// Activates the next configured obstacle when `score` is a positive
    /// multiple of the unlock interval. Returns the obstacle that came into play.
    pub fn maybe_unlock(&mut self, score: u32) -> Option<Position> {
        if !unlock_due(score) || self.is_exhausted() {
            return None;
        }

        let unlocked = self.layout[self.active];
        self.active += 1;
        Some(unlocked)
    }
}

fn unlock_due(score: u32) -> bool {
    score > 0 && score % OBSTACLE_UNLOCK_INTERVAL == 0
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::grid::Position;

    use super::ObstacleSet;

    fn layout(count: i32) -> Arc<[Position]> {
        (0..count).map(|i| Position::new(i, i)).collect()
    }

    #[test]
    fn starts_with_at_most_three_active() {
        assert_eq!(ObstacleSet::new(layout(5)).active_len(), 3);
        assert_eq!(ObstacleSet::new(layout(2)).active_len(), 2);
        assert_eq!(ObstacleSet::new(layout(0)).active_len(), 0);
    }

    #[test]
    fn unlocks_next_obstacle_in_configured_order() {
        let mut obstacles = ObstacleSet::new(layout(5));

        assert_eq!(obstacles.maybe_unlock(3), Some(Position::new(3, 3)));
        assert_eq!(obstacles.maybe_unlock(6), Some(Position::new(4, 4)));
        assert_eq!(obstacles.active(), &layout(5)[..]);
    }

    #[test]
    fn non_multiples_and_zero_do_not_unlock() {
        let mut obstacles = ObstacleSet::new(layout(5));

        assert_eq!(obstacles.maybe_unlock(0), None);
        assert_eq!(obstacles.maybe_unlock(1), None);
        assert_eq!(obstacles.maybe_unlock(4), None);
        assert_eq!(obstacles.active_len(), 3);
    }

    #[test]
    fn unlocking_past_the_end_is_a_no_op() {
        let mut obstacles = ObstacleSet::new(layout(4));

        assert!(obstacles.maybe_unlock(3).is_some());
        assert!(obstacles.is_exhausted());
        assert_eq!(obstacles.maybe_unlock(6), None);
        assert_eq!(obstacles.active_len(), 4);
    }

    #[test]
    fn locked_obstacles_are_not_active() {
        let obstacles = ObstacleSet::new(layout(4));

        assert!(obstacles.contains_active(Position::new(2, 2)));
        assert!(!obstacles.contains_active(Position::new(3, 3)));
        assert_eq!(obstacles.layout().len(), 4);
    }
}
