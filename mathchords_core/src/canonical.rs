// Canonical forms of pitch-class sets, per Forte/Rahn set theory.
//
// All three functions operate on the deduplicated, sorted set derived from
// the input pitch classes. They are pure, deterministic, and defined for any
// input including singletons (span trivially 0), the full chromatic set, and
// the empty set (which canonicalizes to itself).
//
// The tie-break rules are the subtle part and are followed exactly:
// - normal form minimizes (span, rotation) with plain lexicographic
//   comparison as the tie-break;
// - prime form compares the zero-aligned normal forms of the set and of its
//   inversion, each reduced to normal form independently;
// - Rahn normal order breaks compactness ties by comparing spans from the
//   last element backward, (cycle[-i] - cycle[0]) mod 12 for i = 2..=len.

/// Deduplicate and sort pitch classes, reducing each mod 12.
fn reduced_set(pitch_classes: &[u8]) -> Vec<u8> {
    let mut set: Vec<u8> = pitch_classes.iter().map(|&p| p % 12).collect();
    set.sort_unstable();
    set.dedup();
    set
}

/// Span of a rotation: distance from first to last element mod 12.
fn span(rotation: &[u8]) -> u8 {
    match (rotation.first(), rotation.last()) {
        (Some(&first), Some(&last)) => (12 + last - first) % 12,
        _ => 0,
    }
}

/// All cyclic rotations of a sorted set, starting from each index.
fn rotations(set: &[u8]) -> Vec<Vec<u8>> {
    (0..set.len())
        .map(|i| {
            let mut rotation = Vec::with_capacity(set.len());
            rotation.extend_from_slice(&set[i..]);
            rotation.extend_from_slice(&set[..i]);
            rotation
        })
        .collect()
}

/// Select the rotation with the strictly smallest key, keeping the first
/// enumerated one on exact ties (fully symmetric sets tie on every key).
fn min_rotation_by_key<K: Ord>(candidates: Vec<Vec<u8>>, key_fn: impl Fn(&[u8]) -> K) -> Vec<u8> {
    let mut best: Option<(K, Vec<u8>)> = None;
    for rotation in candidates {
        let key = key_fn(&rotation);
        let replace = match &best {
            Some((best_key, _)) => key < *best_key,
            None => true,
        };
        if replace {
            best = Some((key, rotation));
        }
    }
    best.map(|(_, rotation)| rotation).unwrap_or_default()
}

/// The normal form: the most compact rotation of the set, ties broken
/// lexicographically. Not re-zeroed; the result keeps its actual pitch
/// classes.
pub fn normal_form(pitch_classes: &[u8]) -> Vec<u8> {
    let set = reduced_set(pitch_classes);
    min_rotation_by_key(rotations(&set), |rotation| {
        (span(rotation), rotation.to_vec())
    })
}

/// The prime form: the lexicographically smaller of the zero-aligned normal
/// forms of the set and of its inversion. Canonical under both transposition
/// and inversion.
pub fn prime_form(pitch_classes: &[u8]) -> Vec<u8> {
    let set = reduced_set(pitch_classes);
    if set.is_empty() {
        return set;
    }
    let inverted: Vec<u8> = set.iter().map(|&p| (12 - p) % 12).collect();

    let zero_aligned = |form: Vec<u8>| -> Vec<u8> {
        let first = form[0];
        form.iter().map(|&p| (12 + p - first) % 12).collect()
    };
    let candidate = zero_aligned(normal_form(&set));
    let inverted_candidate = zero_aligned(normal_form(&inverted));
    candidate.min(inverted_candidate)
}

/// Rahn normal order: the most compact cycle of the set, compactness ties
/// broken by spans measured from the last element backward.
pub fn rahn_normal_order(pitch_classes: &[u8]) -> Vec<u8> {
    let set = reduced_set(pitch_classes);
    let n = set.len();
    min_rotation_by_key(rotations(&set), |cycle| {
        // Key: compactness first, then (cycle[-i] - cycle[0]) mod 12 for
        // i = 2..=len, compared in order.
        let mut key = Vec::with_capacity(n);
        key.push(span(cycle));
        for i in 2..=n {
            key.push((12 + cycle[n - i] - cycle[0]) % 12);
        }
        key
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_form_triads() {
        assert_eq!(normal_form(&[0, 4, 7]), vec![0, 4, 7]);
        assert_eq!(normal_form(&[0, 3, 7]), vec![0, 3, 7]);
        // Dominant seventh: the compact rotation starts at E, not C.
        assert_eq!(normal_form(&[0, 4, 7, 10]), vec![4, 7, 10, 0]);
    }

    #[test]
    fn test_normal_form_handles_duplicates_and_order() {
        // Input order and duplicates are irrelevant; only the set matters.
        assert_eq!(normal_form(&[7, 0, 4, 0, 7]), normal_form(&[0, 4, 7]));
        assert_eq!(normal_form(&[4, 7, 0]), vec![0, 4, 7]);
    }

    #[test]
    fn test_normal_form_symmetric_set_lexicographic_tie() {
        // Diminished seventh: every rotation spans 9, so the tie-break picks
        // the lexicographically smallest rotation.
        assert_eq!(normal_form(&[3, 9, 0, 6]), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_normal_form_degenerate_inputs() {
        assert_eq!(normal_form(&[]), Vec::<u8>::new());
        assert_eq!(normal_form(&[5]), vec![5]);
        let chromatic: Vec<u8> = (0..12).collect();
        assert_eq!(normal_form(&chromatic), chromatic);
    }

    #[test]
    fn test_prime_form_triads() {
        // Major and minor triads are inversions of each other; both reduce
        // to the same prime form 3-11.
        assert_eq!(prime_form(&[0, 4, 7]), vec![0, 3, 7]);
        assert_eq!(prime_form(&[0, 3, 7]), vec![0, 3, 7]);
        // Transpositions too.
        assert_eq!(prime_form(&[2, 6, 9]), vec![0, 3, 7]);
    }

    #[test]
    fn test_prime_form_inversion_invariance() {
        let sets: [&[u8]; 5] = [
            &[0, 4, 7],
            &[0, 1, 4, 6],
            &[0, 2, 4, 5, 7, 9, 11],
            &[0, 1, 6, 7],
            &[2, 5, 8, 11],
        ];
        for set in sets {
            let inverted: Vec<u8> = set.iter().map(|&p| (12 - p) % 12).collect();
            assert_eq!(prime_form(set), prime_form(&inverted), "set {:?}", set);
        }
    }

    #[test]
    fn test_prime_form_transposition_invariance() {
        let set = [0u8, 1, 4, 6];
        let reference = prime_form(&set);
        for shift in 0..12u8 {
            let transposed: Vec<u8> = set.iter().map(|&p| (p + shift) % 12).collect();
            assert_eq!(prime_form(&transposed), reference, "shift {}", shift);
        }
    }

    #[test]
    fn test_rahn_normal_order_triads() {
        assert_eq!(rahn_normal_order(&[0, 4, 7]), vec![0, 4, 7]);
        assert_eq!(rahn_normal_order(&[0, 4, 7, 10]), vec![4, 7, 10, 0]);
    }

    #[test]
    fn test_rahn_secondary_tie_break() {
        // {0,2,4,8}: rotations [0,2,4,8] and [8,0,2,4] both span 8. The
        // backward-span criterion compares 4-0=4 against (2-8) mod 12 = 6
        // and keeps [0,2,4,8].
        assert_eq!(rahn_normal_order(&[0, 2, 4, 8]), vec![0, 2, 4, 8]);
        // Fully symmetric set: all keys equal, first rotation wins.
        assert_eq!(rahn_normal_order(&[8, 0, 4]), vec![0, 4, 8]);
    }

    #[test]
    fn test_rahn_degenerate_inputs() {
        assert_eq!(rahn_normal_order(&[]), Vec::<u8>::new());
        assert_eq!(rahn_normal_order(&[11]), vec![11]);
    }

    #[test]
    fn test_rotation_invariance_of_all_forms() {
        // Canonical forms depend only on the pitch-class set, so any cyclic
        // rotation of the chord's note sequence maps to the same result.
        let sequence = [2u8, 6, 9, 1];
        let reference_normal = normal_form(&sequence);
        let reference_prime = prime_form(&sequence);
        let reference_rahn = rahn_normal_order(&sequence);
        for i in 0..sequence.len() {
            let mut rotated = sequence.to_vec();
            rotated.rotate_left(i);
            assert_eq!(normal_form(&rotated), reference_normal);
            assert_eq!(prime_form(&rotated), reference_prime);
            assert_eq!(rahn_normal_order(&rotated), reference_rahn);
        }
    }
}
