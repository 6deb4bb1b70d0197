//! Example: Longest Common Subsequence via the linear-space aligner.
//!
//! Run with:
//! `cargo run --example lcs`

use lsalign::longest_common_subsequence;

fn main() {
    let pairs: [(&[u8], &[u8]); 2] = [
        (b"XMJYAUZ", b"MZJAWXU"),
        (
            b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA",
            b"GTCGTTCGGAATGCCGTTGCTCTGTAAA",
        ),
    ];

    for (s, t) in pairs {
        match longest_common_subsequence(s, t, b'-') {
            Ok(lcs) => {
                println!("LCS length: {}", lcs.len());
                println!("LCS: {}", String::from_utf8_lossy(&lcs));
            }
            Err(err) => eprintln!("lcs failed: {err}"),
        }
    }
}
