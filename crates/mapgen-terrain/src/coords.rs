//! Chunked coordinate arithmetic: chunk index + local offset to absolute
//! world coordinates and packed cell identifiers.

use std::fmt;

/// Integer address of a chunk. Negative indices are valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkPos {
    /// Chunk column.
    pub x: i32,
    /// Chunk row.
    pub y: i32,
}

impl ChunkPos {
    /// Create a chunk position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by a chunk delta.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Packed cache key for one absolute cell: `x + y * map_width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub i64);

/// Maps between (chunk, local offset) pairs and absolute world coordinates.
///
/// No bounds are checked. `map_width` must exceed the widest absolute-X span
/// that is resident at once; otherwise distinct cells silently share an id.
/// `chunk_size` must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkedCoordinate {
    chunk_size: i32,
    map_width: i32,
}

impl ChunkedCoordinate {
    /// Create a coordinate mapper.
    pub const fn new(chunk_size: i32, map_width: i32) -> Self {
        debug_assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            chunk_size,
            map_width,
        }
    }

    /// Side length of a chunk, in cells.
    pub const fn chunk_size(&self) -> i32 {
        self.chunk_size
    }

    /// Row stride used when packing cell ids.
    pub const fn map_width(&self) -> i32 {
        self.map_width
    }

    /// Absolute X of local column `local_x` in chunk column `chunk_x`.
    #[inline]
    pub const fn absolute_x(&self, chunk_x: i32, local_x: i32) -> i32 {
        chunk_x * self.chunk_size + local_x
    }

    /// Absolute Y of local row `local_y` in chunk row `chunk_y`.
    #[inline]
    pub const fn absolute_y(&self, chunk_y: i32, local_y: i32) -> i32 {
        chunk_y * self.chunk_size + local_y
    }

    /// Packed id of a cell given its chunk and local offset.
    #[inline]
    pub const fn cell_id(&self, chunk_x: i32, chunk_y: i32, local_x: i32, local_y: i32) -> CellId {
        self.cell_id_at(
            self.absolute_x(chunk_x, local_x),
            self.absolute_y(chunk_y, local_y),
        )
    }

    /// Packed id of a cell given its absolute coordinates.
    #[inline]
    pub const fn cell_id_at(&self, x: i32, y: i32) -> CellId {
        CellId(x as i64 + y as i64 * self.map_width as i64)
    }

    /// Chunk containing an absolute coordinate (floor division).
    pub const fn chunk_of(&self, x: i32, y: i32) -> ChunkPos {
        ChunkPos::new(
            x.div_euclid(self.chunk_size),
            y.div_euclid(self.chunk_size),
        )
    }
}
