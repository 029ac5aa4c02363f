//! Palette tests - ordinals, sprite keys and random selection

use std::collections::HashSet;
use std::thread;

use tetris_blocks::types::{ColorPalette, Describable, COLOR_COUNT};

#[test]
fn test_palette_has_six_colors() {
    assert_eq!(COLOR_COUNT, 6);
    assert_eq!(ColorPalette::COUNT, COLOR_COUNT);
    assert_eq!(ColorPalette::ALL.len(), COLOR_COUNT);
}

#[test]
fn test_sprite_keys() {
    let expected = ["blue", "orange", "purple", "red", "teal", "yellow"];
    for (ordinal, name) in expected.iter().enumerate() {
        let color = ColorPalette::from_ordinal(ordinal as u8).unwrap();
        assert_eq!(color.sprite_name(), *name);
        assert_eq!(color.display_string(), *name);
    }
}

#[test]
fn test_sprite_keys_are_unique() {
    let keys: HashSet<&str> = (0..COLOR_COUNT as u8)
        .filter_map(ColorPalette::from_ordinal)
        .map(|c| c.sprite_name())
        .collect();
    assert_eq!(keys.len(), COLOR_COUNT);
}

#[test]
fn test_random_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                (0..2500)
                    .map(|_| ColorPalette::random().ordinal())
                    .collect::<Vec<u8>>()
            })
        })
        .collect();

    let mut counts = [0usize; COLOR_COUNT];
    for handle in handles {
        for ordinal in handle.join().unwrap() {
            counts[ordinal as usize] += 1;
        }
    }

    assert_eq!(counts.iter().sum::<usize>(), 10_000);
    assert!(counts.iter().all(|&c| c > 0), "counts: {:?}", counts);
}
