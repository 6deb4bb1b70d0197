#![cfg(feature = "heavy")]
use lsalign::{align_linear_space, longest_common_subsequence, scoring::plus_minus_one};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn is_subsequence(needle: &[u8], hay: &[u8]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|c| it.any(|h| h == c))
}

fn strip_gaps(row: &[u8]) -> Vec<u8> {
    row.iter().copied().filter(|&c| c != b'-').collect()
}

#[test]
fn heavy_stress_lcs_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 20_000);
    let t = random_dna(&mut rng, 20_000);
    let sub = longest_common_subsequence(&s, &t, b'-').unwrap();
    assert!(is_subsequence(&sub, &s));
    assert!(is_subsequence(&sub, &t));
    // Random DNA pairs have an LCS of roughly 65% of their length.
    assert!(sub.len() > 10_000);
}

#[test]
fn heavy_stress_linear_alignment() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = random_dna(&mut rng, 20_000);
    let t = random_dna(&mut rng, 15_000);
    let a = align_linear_space(&s, &t, &plus_minus_one::<u8, i32>, b'-', -1).unwrap();
    assert_eq!(a.aligned_x.len(), a.aligned_y.len());
    assert_eq!(strip_gaps(&a.aligned_x), s);
    assert_eq!(strip_gaps(&a.aligned_y), t);
    assert!(a.columns().all(|(x, y)| *x != b'-' || *y != b'-'));
}
