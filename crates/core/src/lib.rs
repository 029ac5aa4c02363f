//! Core block model - the cell values a board is built from
//!
//! This crate holds the value types a board, a renderer and a debug sink share.
//! It performs no I/O and keeps no global state:
//!
//! - **Value identity**: a block is equal to any other block with the same
//!   column, row and color, so blocks work directly as `HashSet` members and
//!   `HashMap` keys
//! - **Mutable position**: collaborators move blocks by writing `column`/`row`
//! - **Fixed color**: chosen at construction, readable but never writable
//! - **Visual slot**: stores the renderer's opaque handle without looking at it
//!
//! # Module Structure
//!
//! - [`block`]: [`Block`], its identity key [`BlockKey`] and [`VisualHandle`]
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use tetris_blocks_core::types::ColorPalette;
//! use tetris_blocks_core::Block;
//!
//! let mut occupied = HashSet::new();
//! occupied.insert(Block::new(4, 19, ColorPalette::Red));
//! occupied.insert(Block::new(5, 19, ColorPalette::random()));
//!
//! assert!(occupied.contains(&Block::new(4, 19, ColorPalette::Red)));
//! assert!(!occupied.contains(&Block::new(4, 18, ColorPalette::Red)));
//! ```

pub mod block;

pub use tetris_blocks_types as types;

pub use block::{Block, BlockKey, VisualHandle};
