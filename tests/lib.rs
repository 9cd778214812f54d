use runlist::{Interval, IntervalSet};

fn runs(set: &IntervalSet) -> Vec<(i64, i64)> {
    set.intervals().map(|run| (run.start(), run.end())).collect()
}

#[test]
fn smoke() {
    let mut set = IntervalSet::new();
    assert_eq!(set.len(), 0);
    assert_eq!(set.is_empty(), true);
    set.remove(0);
    assert_eq!(set.len(), 0);
    assert_eq!(set.is_empty(), true);
    set.insert(1);
    assert_eq!(set.len(), 1);
    assert_eq!(set.is_empty(), false);
    set.insert(i64::MAX - 2);
    assert_eq!(set.len(), 2);
    set.insert(i64::MAX);
    assert_eq!(set.len(), 3);
    set.insert(2);
    assert_eq!(set.len(), 4);
    set.remove(2);
    assert_eq!(set.len(), 3);
    assert_eq!(set.contains(0), false);
    assert_eq!(set.contains(1), true);
    assert_eq!(set.contains(100), false);
    assert_eq!(set.contains(i64::MAX - 2), true);
    assert_eq!(set.contains(i64::MAX - 1), false);
    assert_eq!(set.contains(i64::MAX), true);
}

#[test]
fn negative_values_and_domain_edges() {
    let mut set = IntervalSet::new();
    set.insert(i64::MIN);
    set.insert(i64::MIN + 1);
    set.insert(-1);
    set.insert(0);
    assert_eq!(runs(&set), vec![(i64::MIN, i64::MIN + 1), (-1, 0)]);
    assert!(set.contains(i64::MIN));
    assert!(!set.contains(i64::MIN + 2));
    set.remove(i64::MIN);
    assert_eq!(runs(&set), vec![(i64::MIN + 1, i64::MIN + 1), (-1, 0)]);
}

// The merge progression: a fresh value first stands alone, then grows its
// run upward and downward, and finally fuses neighbouring runs.
#[test]
fn insert_merges_progressively() {
    let mut set = IntervalSet::new();

    set.insert(5);
    assert_eq!(runs(&set), vec![(5, 5)]);

    // extends the run upward
    set.insert(6);
    assert_eq!(runs(&set), vec![(5, 6)]);

    // extends downward, then upward again
    set.insert(4);
    set.insert(7);
    assert_eq!(runs(&set), vec![(4, 7)]);

    // not adjacent to anything: a second run appears
    set.insert(10);
    assert_eq!(runs(&set), vec![(4, 7), (10, 10)]);

    // closes the gap between two runs: one run remains
    set.insert(8);
    set.insert(9);
    assert_eq!(runs(&set), vec![(4, 10)]);
}

#[test]
fn remove_shrinks_splits_and_deletes() {
    let set: IntervalSet = [4, 5, 6, 7, 10].iter().copied().collect();
    assert_eq!(runs(&set), vec![(4, 7), (10, 10)]);

    // left edge shrink leaves the other run alone
    let mut left = set.clone();
    left.remove(4);
    assert_eq!(runs(&left), vec![(5, 7), (10, 10)]);

    // right edge shrink
    let mut right = set.clone();
    right.remove(7);
    assert_eq!(runs(&right), vec![(4, 6), (10, 10)]);

    // interior removal splits the run around the removed value
    let mut split = set.clone();
    split.remove(6);
    assert_eq!(runs(&split), vec![(4, 5), (7, 7), (10, 10)]);

    // removing the only value of a run deletes the run
    let mut singleton = set;
    singleton.remove(10);
    assert_eq!(runs(&singleton), vec![(4, 7)]);
}

#[test]
fn remove_absent_is_noop() {
    let mut set: IntervalSet = [4, 5, 6, 7].iter().copied().collect();
    assert!(!set.remove(3));
    assert!(!set.remove(8));
    assert!(!set.remove(100));
    assert_eq!(runs(&set), vec![(4, 7)]);
}

#[test]
fn min_max_and_clear() {
    let mut set: IntervalSet = [10, -3, 4].iter().copied().collect();
    assert_eq!(set.min(), Some(-3));
    assert_eq!(set.max(), Some(10));
    set.clear();
    assert_eq!(set.min(), None);
    assert_eq!(set.max(), None);
    assert!(set.is_empty());
}

#[test]
fn equality_is_by_contents() {
    let a: IntervalSet = [1, 2, 3].iter().copied().collect();
    let b: IntervalSet = [3, 1, 2].iter().copied().collect();
    let c: IntervalSet = [1, 2, 4].iter().copied().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn interval_accessors() {
    let set: IntervalSet = [4, 5].iter().copied().collect();
    let run: Interval = *set.intervals().next().unwrap();
    assert_eq!(run, Interval::new(4, 5));
    assert_eq!(run.run_len(), 2);
}

// xorshift64, plenty for a workload generator
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

/// Drives 5000 random insert/remove operations over the domain 0..100 while
/// maintaining a dense boolean reference array in lock-step, then cross-checks
/// membership for the entire domain.
#[test]
fn random_workload_matches_dense_reference() {
    const DOMAIN: usize = 100;
    const OPERATIONS: usize = 5000;

    let mut rng = Rng(0x9e3779b97f4a7c15);
    let mut set = IntervalSet::new();
    let mut reference = [false; DOMAIN];

    for _ in 0..OPERATIONS {
        let value = (rng.next() % DOMAIN as u64) as i64;
        if rng.next() % 2 == 0 {
            set.insert(value);
            reference[value as usize] = true;
        } else {
            set.remove(value);
            reference[value as usize] = false;
        }
    }

    for (value, &expected) in reference.iter().enumerate() {
        assert_eq!(
            set.contains(value as i64),
            expected,
            "membership mismatch at {value} after {OPERATIONS} operations"
        );
    }

    // the chain must still be minimal: sorted, disjoint, non-adjacent
    let stored = runs(&set);
    for pair in stored.windows(2) {
        assert!(pair[0].1 + 1 < pair[1].0, "runs {pair:?} should have been merged");
    }
    for &(start, end) in &stored {
        assert!(start <= end);
    }
}
