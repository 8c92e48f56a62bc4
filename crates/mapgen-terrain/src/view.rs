//! The resident chunk window around the viewer.

use crate::coords::ChunkPos;

/// Chunks kept resident on each side of the center chunk (3×3 window).
pub const WINDOW_RADIUS: i32 = 1;

/// Number of chunks along one side of the window.
pub const WINDOW_SPAN: i32 = 2 * WINDOW_RADIUS + 1;

/// A single-chunk pan direction. North is +Y, east is +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +Y
    North,
    /// -Y
    South,
    /// +X
    East,
    /// -X
    West,
}

impl Direction {
    /// Chunk delta for one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The direction undoing this one.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Tracks the center chunk of the resident window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewWindow {
    center: ChunkPos,
}

impl ViewWindow {
    /// Create a window centered on `center`.
    pub const fn new(center: ChunkPos) -> Self {
        Self { center }
    }

    /// The chunk the viewer occupies.
    pub const fn center(&self) -> ChunkPos {
        self.center
    }

    /// Move the center one chunk.
    pub fn pan(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.center = self.center.offset(dx, dy);
    }

    /// Lowest chunk corner of the window.
    pub const fn origin(&self) -> ChunkPos {
        self.center.offset(-WINDOW_RADIUS, -WINDOW_RADIUS)
    }

    /// Every resident chunk, column-major from the origin.
    pub fn chunks(&self) -> impl Iterator<Item = ChunkPos> + use<> {
        let origin = self.origin();
        (0..WINDOW_SPAN)
            .flat_map(move |dx| (0..WINDOW_SPAN).map(move |dy| origin.offset(dx, dy)))
    }

    /// Returns `true` if `chunk` is inside the window.
    pub fn contains(&self, chunk: ChunkPos) -> bool {
        (chunk.x - self.center.x).abs() <= WINDOW_RADIUS
            && (chunk.y - self.center.y).abs() <= WINDOW_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_holds_nine_chunks() {
        let view = ViewWindow::new(ChunkPos::new(1, 1));
        let chunks: Vec<_> = view.chunks().collect();
        assert_eq!(chunks.len(), 9);
        assert_eq!(chunks[0], ChunkPos::new(0, 0));
        assert_eq!(chunks[8], ChunkPos::new(2, 2));
        assert!(chunks.iter().all(|&c| view.contains(c)));
    }

    #[test]
    fn test_pan_moves_one_chunk() {
        let mut view = ViewWindow::new(ChunkPos::new(0, 0));
        view.pan(Direction::North);
        assert_eq!(view.center(), ChunkPos::new(0, 1));
        view.pan(Direction::East);
        assert_eq!(view.center(), ChunkPos::new(1, 1));
        view.pan(Direction::South);
        view.pan(Direction::South);
        assert_eq!(view.center(), ChunkPos::new(1, -1));
        view.pan(Direction::West);
        view.pan(Direction::West);
        assert_eq!(view.center(), ChunkPos::new(-1, -1));
    }

    #[test]
    fn test_opposite_pan_restores_center() {
        for direction in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            let mut view = ViewWindow::new(ChunkPos::new(3, -2));
            view.pan(direction);
            view.pan(direction.opposite());
            assert_eq!(view.center(), ChunkPos::new(3, -2));
        }
    }

    #[test]
    fn test_contains_excludes_outside_ring() {
        let view = ViewWindow::new(ChunkPos::new(0, 0));
        assert!(view.contains(ChunkPos::new(-1, 1)));
        assert!(!view.contains(ChunkPos::new(2, 0)));
        assert!(!view.contains(ChunkPos::new(0, -2)));
    }
}
