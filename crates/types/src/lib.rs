//! Shared types - the block color palette and the describable capability
//!
//! This crate defines the small closed vocabulary every other part of the
//! workspace agrees on. Apart from the random color selector it is pure data:
//! no I/O, no global state, usable from board logic, renderers and debug sinks
//! alike.
//!
//! # Palette
//!
//! Six colors, each with a fixed ordinal and a lowercase sprite key used by an
//! external renderer to resolve its asset:
//!
//! | Ordinal | Variant | Sprite key |
//! |---------|---------|------------|
//! | 0 | `Blue` | `"blue"` |
//! | 1 | `Orange` | `"orange"` |
//! | 2 | `Purple` | `"purple"` |
//! | 3 | `Red` | `"red"` |
//! | 4 | `Teal` | `"teal"` |
//! | 5 | `Yellow` | `"yellow"` |
//!
//! # Examples
//!
//! ```
//! use tetris_blocks_types::{ColorPalette, Describable, COLOR_COUNT};
//!
//! let color = ColorPalette::Teal;
//! assert_eq!(color.sprite_name(), "teal");
//! assert_eq!(color.display_string(), "teal");
//! assert_eq!(color.ordinal(), 4);
//!
//! // Parse from a sprite key (case-insensitive)
//! assert_eq!(ColorPalette::from_str("TEAL"), Some(color));
//!
//! // Random selection always lands inside the palette
//! let random = ColorPalette::random();
//! assert!((random.ordinal() as usize) < COLOR_COUNT);
//! ```

use std::fmt;

use rand::Rng;
use strum::{EnumCount, EnumIter};

/// Number of colors in the palette
///
/// Counted from the enum's declared variants, so adding a color without
/// extending [`ColorPalette::ALL`] fails to compile.
pub const COLOR_COUNT: usize = <ColorPalette as EnumCount>::COUNT;

/// Human-readable representation shared by every loggable type
///
/// Debug paths take `&dyn Describable` (or `impl Describable`) rather than
/// relying on each type's `Debug` output, so the text stays stable across
/// refactors.
pub trait Describable {
    /// Stable, human-readable description of the value
    fn display_string(&self) -> String;
}

/// The block colors
///
/// The discriminant is the color's ordinal. Ordinals are contiguous from 0;
/// `ColorPalette::ALL` lists the variants in ordinal order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter)]
pub enum ColorPalette {
    Blue = 0,
    Orange = 1,
    Purple = 2,
    Red = 3,
    Teal = 4,
    Yellow = 5,
}

// Each variant must sit at the index matching its ordinal.
const _: () = {
    let mut i = 0;
    while i < COLOR_COUNT {
        assert!(ColorPalette::ALL[i] as usize == i);
        i += 1;
    }
};

impl ColorPalette {
    /// Number of variants (same as [`COLOR_COUNT`])
    pub const COUNT: usize = COLOR_COUNT;

    /// Every variant, in ordinal order
    pub const ALL: [ColorPalette; COLOR_COUNT] = [
        ColorPalette::Blue,
        ColorPalette::Orange,
        ColorPalette::Purple,
        ColorPalette::Red,
        ColorPalette::Teal,
        ColorPalette::Yellow,
    ];

    /// Sprite key used to resolve the color's visual asset
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_blocks_types::ColorPalette;
    ///
    /// assert_eq!(ColorPalette::Blue.sprite_name(), "blue");
    /// assert_eq!(ColorPalette::Yellow.sprite_name(), "yellow");
    /// ```
    pub const fn sprite_name(&self) -> &'static str {
        match self {
            ColorPalette::Blue => "blue",
            ColorPalette::Orange => "orange",
            ColorPalette::Purple => "purple",
            ColorPalette::Red => "red",
            ColorPalette::Teal => "teal",
            ColorPalette::Yellow => "yellow",
        }
    }

    /// Position of the variant within the palette
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Look up a variant by ordinal
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_blocks_types::ColorPalette;
    ///
    /// assert_eq!(ColorPalette::from_ordinal(0), Some(ColorPalette::Blue));
    /// assert_eq!(ColorPalette::from_ordinal(5), Some(ColorPalette::Yellow));
    /// assert_eq!(ColorPalette::from_ordinal(6), None);
    /// ```
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Parse a color from its sprite key (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_blocks_types::ColorPalette;
    ///
    /// assert_eq!(ColorPalette::from_str("red"), Some(ColorPalette::Red));
    /// assert_eq!(ColorPalette::from_str("Purple"), Some(ColorPalette::Purple));
    /// assert_eq!(ColorPalette::from_str("magenta"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.sprite_name().eq_ignore_ascii_case(key))
    }

    /// Uniformly random color from the thread-local generator
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Uniformly random color from a caller-supplied generator
    ///
    /// Seed the generator to get a reproducible color sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use tetris_blocks_types::ColorPalette;
    ///
    /// let mut a = StdRng::seed_from_u64(7);
    /// let mut b = StdRng::seed_from_u64(7);
    /// assert_eq!(ColorPalette::random_with(&mut a), ColorPalette::random_with(&mut b));
    /// ```
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // gen_range is bounded to [0, COLOR_COUNT), so the index is always valid.
        let color = Self::ALL[rng.gen_range(0..COLOR_COUNT)];
        log::trace!("random color: {}", color.sprite_name());
        color
    }
}

impl Describable for ColorPalette {
    fn display_string(&self) -> String {
        self.sprite_name().to_string()
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sprite_name())
    }
}
