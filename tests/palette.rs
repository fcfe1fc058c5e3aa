//! Palette pool behavior: sizing, pop ordering, and dual-structure
//! consistency

use pixelbloom::color::{Color, Palette};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_uniform_enumeration_covers_the_requested_count() {
    assert_eq!(Palette::uniform(1).remaining(), 1);
    assert_eq!(Palette::uniform(8).remaining(), 8);
    // 10 rounds up to a 3x3x3 grid; the excess is kept.
    assert_eq!(Palette::uniform(10).remaining(), 27);
    assert_eq!(Palette::uniform(64).remaining(), 64);
}

#[test]
fn test_pop_back_follows_the_enumeration_in_reverse() {
    let mut palette = Palette::uniform(8);

    // The 2x2x2 grid ends with full-intensity blue varying fastest.
    assert_eq!(palette.pop_back(), Color::new(255.0, 255.0, 255.0));
    assert_eq!(palette.pop_back(), Color::new(255.0, 255.0, 0.0));
    assert_eq!(palette.pop_back(), Color::new(255.0, 0.0, 255.0));
    assert_eq!(palette.remaining(), 5);
}

#[test]
fn test_pop_closest_returns_the_nearest_then_the_next_nearest() {
    let colors = vec![
        Color::new(10.0, 10.0, 10.0),
        Color::new(50.0, 50.0, 50.0),
        Color::new(240.0, 240.0, 240.0),
    ];
    let mut palette = Palette::new(colors);
    let target = Color::new(45.0, 45.0, 45.0);

    assert_eq!(palette.pop_closest(&target, 0.0), Color::new(50.0, 50.0, 50.0));
    assert_eq!(palette.pop_closest(&target, 0.0), Color::new(10.0, 10.0, 10.0));
    assert_eq!(palette.pop_closest(&target, 0.0), Color::new(240.0, 240.0, 240.0));
    assert_eq!(palette.remaining(), 0);
}

#[test]
fn test_epsilon_does_not_change_which_color_pops() {
    let colors = vec![Color::new(0.0, 0.0, 0.0), Color::new(200.0, 0.0, 0.0)];
    let target = Color::new(60.0, 0.0, 0.0);

    let mut strict = Palette::new(colors.clone());
    let mut loose = Palette::new(colors);

    // The tolerance is a hook; the true nearest pops either way.
    assert_eq!(
        strict.pop_closest(&target, 0.0),
        loose.pop_closest(&target, 1000.0)
    );
}

#[test]
fn test_pop_random_consumes_a_member_color() {
    let mut palette = Palette::uniform(27);
    let mut rng = StdRng::seed_from_u64(4);

    let popped = palette.pop_random(&mut rng);
    assert_eq!(palette.remaining(), 26);
    let grid: Vec<f64> = vec![0.0, 127.5, 255.0];
    assert!(grid.contains(&popped.r));
    assert!(grid.contains(&popped.g));
    assert!(grid.contains(&popped.b));
}

#[test]
fn test_mixed_pop_sequence_drains_the_palette_completely() {
    let mut palette = Palette::uniform(16);
    let mut rng = StdRng::seed_from_u64(21);
    let target = Color::new(128.0, 64.0, 32.0);

    let mut drained = 0;
    while palette.remaining() > 0 {
        match drained % 3 {
            0 => {
                palette.pop_closest(&target, 0.0);
            }
            1 => {
                palette.pop_random(&mut rng);
            }
            _ => {
                palette.pop_back();
            }
        }
        drained += 1;
    }
    assert_eq!(drained, 27);
}
