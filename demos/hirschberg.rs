//! Example: linear-space global alignment with Hirschberg's algorithm.
//!
//! Run with:
//! `cargo run --example hirschberg`

use lsalign::{scoring::MatchMismatch, AlignerBuilder, Strategy};

fn main() {
    let pairs: [(&[u8], &[u8]); 3] = [
        (b"GATTACA", b"GCATGCU"),
        (b"AGTACGCA", b"TATGC"),
        (
            b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA",
            b"GTCGTTCGGAATGCCGTTGCTCTGTAAA",
        ),
    ];

    let aligner = AlignerBuilder::new(MatchMismatch::new(1i32, -1), b'-')
        .with_gap_penalty(-1)
        .with_score_bound(1)
        .with_strategy(Strategy::LinearSpace)
        .build();

    for (s, t) in pairs {
        match aligner.align(s, t) {
            Ok(alignment) => {
                let (w, z) = alignment.to_strings();
                println!("score = {}", aligner.score_of(&alignment));
                println!("  {w}");
                println!("  {z}");
            }
            Err(err) => eprintln!("alignment failed: {err}"),
        }
    }
}
