//! Jaccard similarity over word sets.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// |A ∩ B| / |A ∪ B|. Zero when either set is empty.
pub fn jaccard<T: Eq + Hash>(a: &FxHashSet<T>, b: &FxHashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&'static str]) -> FxHashSet<&'static str> {
        words.iter().copied().collect()
    }

    #[test]
    fn test_identical() {
        let a = set(&["agua", "vida"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_overlap() {
        let sim = jaccard(&set(&["agua"]), &set(&["fuego"]));
        assert!(sim.abs() < 1e-10);
    }

    #[test]
    fn test_partial_overlap() {
        // Intersection = {b, c}, Union = {a, b, c, d} -> 0.5
        let sim = jaccard(&set(&["a", "b", "c"]), &set(&["b", "c", "d"]));
        assert!((sim - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty() {
        let empty = set(&[]);
        assert_eq!(jaccard(&empty, &empty), 0.0);
        assert_eq!(jaccard(&empty, &set(&["a"])), 0.0);
    }
}
