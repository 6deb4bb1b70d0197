#![cfg(feature = "parallel")]

use lsalign::{align_linear_space, scoring::MatchMismatch, Alignment};
use proptest::prelude::*;

fn on_threads(threads: usize, s: &[u8], t: &[u8]) -> Alignment<u8> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .unwrap();
    pool.install(|| align_linear_space(s, t, &MatchMismatch::new(1i32, -1), b'-', -1).unwrap())
}

#[test]
fn reference_examples_under_parallel_rows() {
    let a = on_threads(4, b"GATTACA", b"GCATGCU");
    assert_eq!(a.to_strings(), ("G-ATTACA".into(), "GCA-TGCU".into()));
    let a = on_threads(4, b"AGTACGCA", b"TATGC");
    assert_eq!(a.to_strings(), ("AGTACGCA".into(), "--TATGC-".into()));
}

proptest! {
    #[test]
    fn thread_count_does_not_change_output(a in "[ACGT]{0,24}", b in "[ACGT]{0,24}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(on_threads(1, s, t), on_threads(4, s, t));
    }
}
