//! Block demo runner (default binary).
//!
//! Builds a row of blocks along the bottom of a 10-wide board and logs their
//! display strings. Settings come from the environment:
//!
//! - `TETRIS_BLOCKS_COUNT`: number of blocks (default 4)
//! - `TETRIS_BLOCKS_SEED`: seed for reproducible colors (default: thread RNG)
//! - `TETRIS_BLOCKS_COLOR`: force every block to one sprite key
//!
//! Run with `RUST_LOG=debug` to see library logging as well.

use std::env;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tetris_blocks::core::{Block, VisualHandle};
use tetris_blocks::types::{ColorPalette, Describable};

const BOARD_WIDTH: i32 = 10;
const BOTTOM_ROW: i32 = 19;

/// Demo configuration
#[derive(Debug, Clone, PartialEq)]
struct DemoConfig {
    count: usize,
    seed: Option<u64>,
    color: Option<ColorPalette>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 4,
            seed: None,
            color: None,
        }
    }
}

impl DemoConfig {
    fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from a variable lookup (`env::var` outside tests)
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let count: usize = match var("TETRIS_BLOCKS_COUNT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| anyhow!("invalid TETRIS_BLOCKS_COUNT value: {}", v))?,
            None => Self::default().count,
        };
        // Block coordinates are i32, so every index must fit one.
        if i32::try_from(count).is_err() {
            return Err(anyhow!(
                "TETRIS_BLOCKS_COUNT too large: {} (max {})",
                count,
                i32::MAX
            ));
        }

        let seed: Option<u64> = match var("TETRIS_BLOCKS_SEED") {
            Some(v) => Some(
                v.trim()
                    .parse()
                    .map_err(|_| anyhow!("invalid TETRIS_BLOCKS_SEED value: {}", v))?,
            ),
            None => None,
        };

        let color = var("TETRIS_BLOCKS_COLOR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| {
                ColorPalette::from_str(&s).ok_or_else(|| anyhow!("unknown block color: {}", s))
            })
            .transpose()?;

        Ok(Self { count, seed, color })
    }
}

fn build_blocks(config: &DemoConfig) -> Vec<Block> {
    let mut seeded = config.seed.map(StdRng::seed_from_u64);
    let mut next_color = || match (config.color, seeded.as_mut()) {
        (Some(color), _) => color,
        (None, Some(rng)) => ColorPalette::random_with(rng),
        (None, None) => ColorPalette::random(),
    };

    let count = i32::try_from(config.count).unwrap_or(i32::MAX);
    (0..count)
        .map(|i| Block::new(i % BOARD_WIDTH, BOTTOM_ROW - i / BOARD_WIDTH, next_color()))
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let config = DemoConfig::from_env()?;
    log::debug!("config: {:?}", config);

    let mut blocks = build_blocks(&config);
    for (id, block) in blocks.iter_mut().enumerate() {
        block.attach_visual(VisualHandle::new(id as u64));
        log::info!("{} ({})", block.display_string(), block.sprite_name());
    }

    Ok(())
}
