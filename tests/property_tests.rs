use seqkit::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::LinkedList;

fn random_values(rng: &mut StdRng, max_len: usize, spread: i32) -> Vec<i32> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(-spread..=spread)).collect()
}

#[test]
fn test_sort_matches_std() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1_000 {
        let input = random_values(&mut rng, 60, 20);
        let sorted = sort(&input);

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sorted, expected);
        assert_eq!(sort(&sorted), sorted);
    }
}

#[test]
fn test_binary_search_finds_iff_present() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1_000 {
        let input = random_values(&mut rng, 40, 15);
        let target = rng.random_range(-20..=20);

        let mut sorted = input.clone();
        sorted.sort();

        match binary_search(&input, target) {
            Some(index) => {
                assert_eq!(sorted[index], target);
                // Leftmost occurrence.
                assert!(index == 0 || sorted[index - 1] < target);
            }
            None => assert!(!input.contains(&target)),
        }
    }
}

#[test]
fn test_rotation_strategies_agree() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..1_000 {
        let input = random_values(&mut rng, 30, 100);
        let n = input.len() as i64;
        let k = rng.random_range(-100..=100);

        let reversal = rotate_right_reversal(&input, k);
        let buffer = rotate_right_buffer(&input, k);
        assert_eq!(reversal, buffer);

        assert_eq!(rotate_right_reversal(&input, k + n), reversal);
        assert_eq!(rotate_right_buffer(&input, k - n), reversal);

        let mut expected = input.clone();
        expected.rotate_right(normalize_rotation(k, input.len()));
        assert_eq!(reversal, expected);
    }
}

#[test]
fn test_dedup_matches_std() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..1_000 {
        let input = random_values(&mut rng, 50, 10);

        let mut expected = input.clone();
        expected.sort();
        expected.dedup();

        let unique = dedup_sorted(&input);
        assert!(unique.len() <= input.len());
        assert_eq!(unique, expected);
    }
}

#[test]
fn test_reverse_is_involution() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..500 {
        let input = random_values(&mut rng, 40, 1_000);

        let mut expected = input.clone();
        expected.reverse();
        assert_eq!(reverse(&input), expected);
        assert_eq!(reverse(&reverse(&input)), input);

        let original: LinkedList<i32> = input.iter().copied().collect();
        let mut list = original.clone();
        reverse_in_place(&mut list);
        assert!(list.iter().eq(expected.iter()));
        reverse_in_place(&mut list);
        assert_eq!(list, original);
    }
}

#[test]
fn test_insertion_sort_is_stable() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        let input = random_values(&mut rng, 40, 5);
        let mut list: LinkedList<i32> = input.iter().copied().collect();
        insertion_sort(&mut list);

        let mut expected = input.clone();
        expected.sort();
        assert!(list.iter().eq(expected.iter()));
    }
}

#[test]
fn test_scan_statistics_match_iterators() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..500 {
        let input = random_values(&mut rng, 50, i32::MAX);

        let total: i64 = input.iter().map(|&v| i64::from(v)).sum();
        assert_eq!(sum(&input), total);

        match (input.iter().min(), input.iter().max()) {
            (Some(&min), Some(&max)) => {
                assert_eq!(min_max(&input), Ok(MinMax { min, max }));
                assert_eq!(average(&input), Ok(total as f64 / input.len() as f64));
            }
            _ => {
                assert!(min_max(&input).is_err());
                assert!(average(&input).is_err());
            }
        }

        for target in input.iter().take(3) {
            let hits = linear_search(&input, *target);
            assert!(!hits.is_empty());
            assert!(hits.iter().all(|&index| input[index] == *target));
            assert_eq!(hits.len(), input.iter().filter(|&v| v == target).count());
        }
    }
}
