//! Stress tests that push the heaps through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch bookkeeping bugs that only show up under load.

use graph_heaps::binary::BinaryHeap;
use graph_heaps::fibonacci::FibonacciHeap;
use graph_heaps::pairing::PairingHeap;
use graph_heaps::{Key, PriorityQueue, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Many inserts and extractions
fn test_massive_operations<H: PriorityQueue>(mut heap: H) {
    for v in (0..5_000).rev() {
        heap.insert(v as Key, v);
    }
    assert_eq!(heap.len(), 5_000);
    for v in 0..5_000 {
        assert_eq!(heap.extract_min(), Some((v as Key, v)));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.operation_count(), 10_000);
}

/// Every key lowered once, in reverse, so each decrease creates a new minimum
fn test_many_decrease_keys<H: PriorityQueue>(mut heap: H) {
    for v in 0..2_000 {
        heap.insert(100_000 + v as Key, v);
    }
    heap.extract_min();
    for v in (1..2_000).rev() {
        heap.decrease_key(v, v as Key);
        assert_eq!(heap.peek(), Some((v as Key, v)));
    }
    for v in 1..2_000 {
        assert_eq!(heap.extract_min(), Some((v as Key, v)));
    }
}

/// Repeated decreases of the same value interleaved with extractions
fn test_decrease_chains<H: PriorityQueue>(mut heap: H) {
    for v in 0..1_000 {
        heap.insert(10_000, v);
    }
    let mut next = 9_999;
    for round in 0..500 {
        for v in (round * 2)..(round * 2 + 2) {
            for step in 0..3 {
                heap.decrease_key(v, next - step);
            }
            next -= 3;
        }
        let (key, _) = heap.extract_min().unwrap();
        assert_eq!(key, next + 1);
    }
    assert_eq!(heap.len(), 500);
}

/// Random mix checked against a sorted reference
fn test_random_workload<H: PriorityQueue>(mut heap: H, seed: u64) {
    const N: usize = 3_000;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys: Vec<Option<Key>> = vec![None; N];

    for _ in 0..30_000 {
        match rng.gen_range(0..10) {
            0..=3 => {
                let v: Value = rng.gen_range(0..N);
                if keys[v].is_none() {
                    let k = rng.gen_range(0..1_000_000);
                    heap.insert(k, v);
                    keys[v] = Some(k);
                }
            }
            4..=6 => {
                let v: Value = rng.gen_range(0..N);
                if let Some(current) = keys[v] {
                    let k = current - rng.gen_range(0..1_000);
                    heap.decrease_key(v, k);
                    keys[v] = Some(k.min(current));
                }
            }
            _ => {
                let expected = keys.iter().flatten().min().copied();
                match heap.extract_min() {
                    Some((k, v)) => {
                        assert_eq!(Some(k), expected);
                        assert_eq!(keys[v].take(), Some(k));
                    }
                    None => assert_eq!(expected, None),
                }
            }
        }
    }

    let remaining = keys.iter().filter(|k| k.is_some()).count();
    assert_eq!(heap.len(), remaining);
    let mut last = Key::MIN;
    while let Some((k, v)) = heap.extract_min() {
        assert!(k >= last);
        assert_eq!(keys[v].take(), Some(k));
        last = k;
    }
}

macro_rules! define_stress_tests {
    ($module:ident, $heap:ident) => {
        mod $module {
            use super::*;

            #[test]
            fn massive_operations() {
                test_massive_operations($heap::new(5_000));
            }

            #[test]
            fn many_decrease_keys() {
                test_many_decrease_keys($heap::new(2_000));
            }

            #[test]
            fn decrease_chains() {
                test_decrease_chains($heap::new(1_000));
            }

            #[test]
            fn random_workload() {
                for seed in 0..3 {
                    test_random_workload($heap::new(3_000), seed);
                }
            }
        }
    };
}

define_stress_tests!(binary, BinaryHeap);
define_stress_tests!(fibonacci, FibonacciHeap);
define_stress_tests!(pairing, PairingHeap);
