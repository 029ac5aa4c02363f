//! Block module - a single colored cell on the board
//!
//! A block is a value: it is identified by its column, row and color, nothing
//! else. Two blocks built from the same triple are interchangeable as set
//! members or map keys. The renderer's visual handle rides along in a slot but
//! never takes part in comparisons.
//!
//! Coordinates are unbounded `i32`s; keeping blocks on the board is the
//! board's job.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::{ColorPalette, Describable};

/// Opaque handle to a render representation owned by the renderer
///
/// The core stores the raw value and hands it back; it never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(u64);

impl VisualHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Identity of a block: position plus color
///
/// Equality and hashing for [`Block`] are both taken from this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockKey {
    pub column: i32,
    pub row: i32,
    pub color: ColorPalette,
}

impl Describable for BlockKey {
    fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column, self.row)
    }
}

/// One occupied cell on the board
///
/// # Examples
///
/// ```
/// use tetris_blocks_core::Block;
/// use tetris_blocks_core::types::{ColorPalette, Describable};
///
/// let mut block = Block::new(8, 3, ColorPalette::Blue);
/// assert_eq!(block.display_string(), "blue: [8, 3]");
///
/// // Position is mutable, color is not
/// block.row += 1;
/// assert_eq!(block.position(), (8, 4));
/// assert_eq!(block.color(), ColorPalette::Blue);
///
/// assert_eq!(block, Block::new(8, 4, ColorPalette::Blue));
/// ```
#[derive(Debug, Clone)]
pub struct Block {
    pub column: i32,
    pub row: i32,
    color: ColorPalette,
    visual: Option<VisualHandle>,
}

impl Block {
    /// Create a block at `(column, row)`; no range checks are applied
    pub fn new(column: i32, row: i32, color: ColorPalette) -> Self {
        Self {
            column,
            row,
            color,
            visual: None,
        }
    }

    pub fn color(&self) -> ColorPalette {
        self.color
    }

    /// Sprite key of the block's color
    pub fn sprite_name(&self) -> &'static str {
        self.color.sprite_name()
    }

    /// Value identity of the block
    pub fn key(&self) -> BlockKey {
        BlockKey {
            column: self.column,
            row: self.row,
            color: self.color,
        }
    }

    /// Current `(column, row)`
    pub fn position(&self) -> (i32, i32) {
        (self.column, self.row)
    }

    pub fn set_position(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
    }

    /// Shift the block by `(dc, dr)`
    ///
    /// Arithmetic wraps at the `i32` limits.
    pub fn translate(&mut self, dc: i32, dr: i32) {
        self.column = self.column.wrapping_add(dc);
        self.row = self.row.wrapping_add(dr);
    }

    pub fn visual(&self) -> Option<VisualHandle> {
        self.visual
    }

    /// Store the renderer's handle, returning the one it replaces
    pub fn attach_visual(&mut self, handle: VisualHandle) -> Option<VisualHandle> {
        let previous = self.visual.replace(handle);
        if let Some(old) = previous {
            log::debug!(
                "block {} visual replaced: {} -> {}",
                self,
                old.raw(),
                handle.raw()
            );
        } else {
            log::debug!("block {} visual attached: {}", self, handle.raw());
        }
        previous
    }

    /// Clear the visual slot, returning its handle for the renderer to release
    pub fn detach_visual(&mut self) -> Option<VisualHandle> {
        self.visual.take()
    }
}

impl From<BlockKey> for Block {
    fn from(key: BlockKey) -> Self {
        Self::new(key.column, key.row, key.color)
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Block {}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Describable for Block {
    fn display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key(), f)
    }
}
