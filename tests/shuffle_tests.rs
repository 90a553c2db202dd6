#![cfg(feature = "collection")]
//! Statistical tests for shuffle.
//!
//! A seeded generator keeps the outcome reproducible; thresholds sit far in
//! the tail of the chi-square distribution so that an unbiased shuffle
//! passes for any reasonable seed.

use foldkit::collection::{shuffle, shuffle_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use std::collections::HashMap;

const TRIALS: usize = 24_000;

fn chi_square(observed: impl IntoIterator<Item = usize>, expected: f64) -> f64 {
    observed
        .into_iter()
        .map(|count| {
            #[allow(clippy::cast_precision_loss)]
            let difference = count as f64 - expected;
            difference * difference / expected
        })
        .sum()
}

#[rstest]
fn shuffle_leaves_input_untouched() {
    let original: Vec<u32> = (1..=1000).collect();
    let snapshot = original.clone();
    let mut shuffled = shuffle(&original);

    assert_eq!(original, snapshot);
    shuffled.sort_unstable();
    assert_eq!(shuffled, original);
}

#[rstest]
fn shuffle_of_trivial_inputs() {
    let empty: [char; 0] = [];
    assert!(shuffle(&empty).is_empty());
    assert_eq!(shuffle(&['x']), vec!['x']);
}

#[rstest]
#[case(1)]
#[case(42)]
#[case(20_240_101)]
fn shuffle_has_no_position_bias(#[case] seed: u64) {
    const LENGTH: usize = 4;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = [[0_usize; LENGTH]; LENGTH];

    for _ in 0..TRIALS {
        let shuffled = shuffle_with(&[0_usize, 1, 2, 3], &mut rng);
        for (position, value) in shuffled.into_iter().enumerate() {
            counts[value][position] += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let expected = (TRIALS / LENGTH) as f64;
    let statistic = chi_square(counts.iter().flatten().copied(), expected);
    // 9 degrees of freedom; 40 is beyond the 0.9999 quantile.
    assert!(statistic < 40.0, "position bias, chi-square = {statistic}");
}

#[rstest]
fn shuffle_reaches_every_permutation_evenly() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

    for _ in 0..TRIALS {
        *counts.entry(shuffle_with(&[1, 2, 3, 4], &mut rng)).or_default() += 1;
    }

    assert_eq!(counts.len(), 24);
    #[allow(clippy::cast_precision_loss)]
    let expected = (TRIALS / 24) as f64;
    let statistic = chi_square(counts.into_values(), expected);
    // 23 degrees of freedom; 65 is beyond the 0.9999 quantile.
    assert!(statistic < 65.0, "permutation bias, chi-square = {statistic}");
}
