use crate::input::Direction;

/// Logical grid dimensions of the toroidal board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }
}

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`, without wrapping.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        wrap(self, bounds)
    }
}

/// Maps any position onto the torus using the non-negative remainder per axis.
#[must_use]
pub fn wrap(position: Position, bounds: GridSize) -> Position {
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    Position {
        x: position.x.rem_euclid(i32::from(bounds.width)),
        y: position.y.rem_euclid(i32::from(bounds.height)),
    }
}
