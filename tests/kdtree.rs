//! Nearest-neighbor correctness of the palette tree against linear scans

use pixelbloom::color::{Color, KdTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_color(rng: &mut StdRng) -> Color {
    // Coarse channel grid so duplicates and ties actually occur.
    Color::new(
        f64::from(rng.random_range(0..8_i32)) * 36.0,
        f64::from(rng.random_range(0..8_i32)) * 36.0,
        f64::from(rng.random_range(0..8_i32)) * 36.0,
    )
}

#[test]
fn test_pop_matches_a_linear_scan_over_the_remaining_multiset() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut colors: Vec<Color> = (0..150).map(|_| random_color(&mut rng)).collect();
    let mut mirror = colors.clone();

    let mut tree = KdTree::build(&mut colors);
    assert_eq!(tree.available() as usize, mirror.len());

    while !mirror.is_empty() {
        let query = Color::new(
            f64::from(rng.random_range(0..256_i32)),
            f64::from(rng.random_range(0..256_i32)),
            f64::from(rng.random_range(0..256_i32)),
        );

        let best = mirror
            .iter()
            .map(|color| query.distance(color))
            .fold(f64::INFINITY, f64::min);

        let popped = tree.pop(&query);
        let popped_distance = query.distance(&popped);
        assert!(
            (popped_distance - best).abs() < 1e-9,
            "tree popped at distance {popped_distance}, linear scan found {best}"
        );

        let position = mirror
            .iter()
            .position(|color| *color == popped)
            .expect("popped color still in the mirror multiset");
        mirror.swap_remove(position);
        assert_eq!(tree.available() as usize, mirror.len());
    }
}

#[test]
fn test_duplicate_groups_are_exhausted_closest_first() {
    let mut colors = vec![
        Color::new(10.0, 10.0, 10.0),
        Color::new(10.0, 10.0, 10.0),
        Color::new(10.0, 10.0, 20.0),
        Color::new(10.0, 10.0, 20.0),
    ];
    let mut tree = KdTree::build(&mut colors);
    let query = Color::new(10.0, 10.0, 12.0);

    // The nearer group drains completely before the search crosses over.
    assert_eq!(tree.pop(&query), Color::new(10.0, 10.0, 10.0));
    assert_eq!(tree.pop(&query), Color::new(10.0, 10.0, 10.0));
    assert_eq!(tree.pop(&query), Color::new(10.0, 10.0, 20.0));
    assert_eq!(tree.pop(&query), Color::new(10.0, 10.0, 20.0));
    assert_eq!(tree.available(), 0);
}

#[test]
fn test_fully_identical_input_collapses_and_pops_by_multiplicity() {
    let mut colors = vec![Color::new(5.0, 5.0, 5.0); 3];
    let mut tree = KdTree::build(&mut colors);
    assert_eq!(tree.available(), 3);

    for remaining in (0..3).rev() {
        let popped = tree.pop(&Color::new(200.0, 0.0, 60.0));
        assert_eq!(popped, Color::new(5.0, 5.0, 5.0));
        assert_eq!(tree.available(), remaining);
    }
}

#[test]
fn test_peek_reports_distance_without_consuming() {
    let mut colors = vec![
        Color::new(0.0, 0.0, 0.0),
        Color::new(100.0, 0.0, 0.0),
        Color::new(0.0, 100.0, 0.0),
    ];
    let mut tree = KdTree::build(&mut colors);

    let (distance, value) = tree.peek(&Color::new(90.0, 0.0, 0.0));
    assert_eq!(value, Color::new(100.0, 0.0, 0.0));
    assert!((distance - 10.0).abs() < 1e-12);
    assert_eq!(tree.available(), 3);

    assert_eq!(tree.pop(&Color::new(90.0, 0.0, 0.0)), value);
    assert_eq!(tree.available(), 2);
}
