//! Example: quadratic-space Needleman–Wunsch global alignment.
//!
//! Run with:
//! `cargo run --example nw`

use lsalign::{align_quadratic, matrix::score_matrix, scoring::plus_minus_one, ScoreParams};

const X: &[u8] = b"GAATTTATGCTTATAGTTTAAATCCTTTCCTCTGGTCTCCCTTTGAATCATTATGTGAAATAGGTGAAAAGCCAGATCCTGACCAAACATTTAAATTCACATCTTTACAGAACTTTAGCAACTGTCTGCCCAACTCTTGCACAACACAAGTACCTAATCATAGTTTATCTCACAGACAGCCTGAGACAGTTCTTACGGAAACACCCCAGGACACAATTGAATTAAACAGATTGAATTTAGAATCTTCCAA";
const Y: &[u8] = b"ATTCCTGCTTACCGTTTAAATCCTTTCCTCTGGTCTCCCTTTGAATCATTATGTGAAATAGGTGAAAAGCCAGATCCTGACCAAACATTTAAATTCACATCTTTACAGAACTTTAGCAACTGTCTGCCCAACTCTTGCACAACACAAGTACCTAATCATAGTTTATCTCACAGACAGCCTGAGACAGTTCTTACGGAAACACCCCAGGACACAATTGAATTAAACAGATTGAATTTAGAATCTTCCAA";
const Z: &[u8] = b"GAATTTATGCTTATAGTTTAAATCCTTTCCTCTGGTCTCCCTTTGAATCATTATGTGAAATAGGTGAAAAGCCAGATCCTGACCAAACATTTAAATTCACATCTTTACAGAACTTTAGCAACTGTCTGCCCAACTCTTGCACAACACAAGTACCTAATCATAGTTTATCT";

fn main() {
    let s = b"GATTACA";
    let t = b"GCATGCU";

    let grid = score_matrix(s, t, &plus_minus_one::<u8, i16>, &ScoreParams::default())
        .expect("i16 is wide enough for this example");
    println!("Score matrix:");
    for row in grid.to_rows() {
        println!("  {row:?}");
    }

    for (a, b) in [(&s[..], &t[..]), (X, Y), (X, Z), (Y, Z)] {
        let alignment = align_quadratic(a, b, &plus_minus_one::<u8, i16>, -1, b'-')
            .expect("no capacity bound configured");
        let (w, z) = alignment.to_strings();
        println!();
        println!("score = {}", alignment.score(&plus_minus_one::<u8, i16>, -1, &b'-'));
        println!("a = {w}");
        println!("b = {z}");
    }
}
