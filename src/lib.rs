//! Tetris blocks (workspace facade crate).
//!
//! Exposes the workspace crates as `tetris_blocks::{core,types}` so callers
//! depend on one package while the implementation lives under `crates/`.

pub use tetris_blocks_core as core;
pub use tetris_blocks_types as types;
