use std::io::{self, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use lsalign::{
    longest_common_subsequence, scoring::MatchMismatch, AlignerBuilder, Alignment, Strategy,
};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192, 16384];
const MATCH_SCORE: i32 = 2;
const MISMATCH_SCORE: i32 = -1;
const GAP_PENALTY: i32 = -2;

/// Scaling probe: wall time, memory delta and correctness of both alignment
/// strategies and LCS on deterministic DNA of growing length.
#[derive(Parser, Debug)]
#[command(name = "align_probe", version)]
struct Options {
    /// Output format for the measurements.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest sequence length checked against a full-table baseline.
    #[arg(long, default_value_t = 1024)]
    verify_limit: usize,

    /// Skip the quadratic strategy above this length.
    #[arg(long, default_value_t = 4096)]
    quadratic_limit: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

#[derive(Clone, Debug, Serialize)]
struct Measurement {
    scenario: &'static str,
    len: usize,
    score: i64,
    columns: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn main() {
    let options = Options::parse();

    eprintln!("align_probe: sizes {SIZES:?}, verify limit {}", options.verify_limit);

    let mut sys = System::new();
    let mut measurements = Vec::new();

    for strategy in [Strategy::Quadratic, Strategy::LinearSpace] {
        eprintln!("[{strategy:?}]");
        for &len in SIZES {
            if strategy == Strategy::Quadratic && len > options.quadratic_limit {
                continue;
            }
            let m = run_alignment(strategy, len, &options, &mut sys);
            report(&m);
            measurements.push(m);
        }
    }

    eprintln!("[lcs]");
    for &len in SIZES {
        let m = run_lcs(len, &options, &mut sys);
        report(&m);
        measurements.push(m);
    }

    let failed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .count();
    eprintln!("{} measurements, {failed} failed", measurements.len());

    if let Err(err) = write(options.format, &measurements) {
        eprintln!("align_probe output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

fn run_alignment(
    strategy: Strategy,
    len: usize,
    options: &Options,
    sys: &mut System,
) -> Measurement {
    let seq_a = deterministic_dna(len, 0);
    let seq_b = deterministic_dna(len, 2);
    let scenario = match strategy {
        Strategy::Quadratic => "needleman_wunsch",
        Strategy::LinearSpace => "hirschberg",
    };
    let aligner = AlignerBuilder::new(MatchMismatch::new(MATCH_SCORE, MISMATCH_SCORE), b'-')
        .with_gap_penalty(GAP_PENALTY)
        .with_score_bound(MATCH_SCORE.abs().max(MISMATCH_SCORE.abs()))
        .with_strategy(strategy)
        .build();

    measure(scenario, len, sys, || match aligner.align(&seq_a, &seq_b) {
        Ok(alignment) => {
            let score = aligner.score_of(&alignment);
            let (status, detail) = if len <= options.verify_limit {
                check(
                    &alignment,
                    &seq_a,
                    &seq_b,
                    score,
                    full_nw_score(&seq_a, &seq_b),
                )
            } else {
                (VerificationStatus::NotChecked, None)
            };
            (i64::from(score), alignment.len(), status, detail)
        }
        Err(err) => (0, 0, VerificationStatus::Failed, Some(err.to_string())),
    })
}

fn run_lcs(len: usize, options: &Options, sys: &mut System) -> Measurement {
    let seq_a = deterministic_dna(len, 0);
    let seq_b = deterministic_dna(len, 1);

    measure("lcs", len, sys, || {
        match longest_common_subsequence(&seq_a, &seq_b, b'-') {
            Ok(lcs) => {
                let (status, detail) = if len <= options.verify_limit {
                    let baseline = full_lcs_len(&seq_a, &seq_b);
                    if baseline == lcs.len() {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some(format!("expected {baseline}, got {}", lcs.len())),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                };
                (lcs.len() as i64, lcs.len(), status, detail)
            }
            Err(err) => (0, 0, VerificationStatus::Failed, Some(err.to_string())),
        }
    })
}

fn check(
    alignment: &Alignment<u8>,
    seq_a: &[u8],
    seq_b: &[u8],
    score: i32,
    baseline: i32,
) -> (VerificationStatus, Option<String>) {
    let strip = |row: &[u8]| -> Vec<u8> { row.iter().copied().filter(|&c| c != b'-').collect() };
    if alignment.aligned_x.len() != alignment.aligned_y.len() {
        return (
            VerificationStatus::Failed,
            Some("aligned rows differ in length".to_string()),
        );
    }
    if strip(&alignment.aligned_x) != seq_a || strip(&alignment.aligned_y) != seq_b {
        return (
            VerificationStatus::Failed,
            Some("aligned rows do not reproduce the inputs".to_string()),
        );
    }
    if score != baseline {
        return (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {score}")),
        );
    }
    (VerificationStatus::Passed, None)
}

fn measure<F>(scenario: &'static str, len: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (i64, usize, VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (score, columns, status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        len,
        score,
        columns,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

fn report(m: &Measurement) {
    eprintln!(
        "  len={:<6} score={:<8} columns={:<6} time={:.3}s status={}",
        m.len,
        m.score,
        m.columns,
        m.wall_s,
        m.status.label()
    );
    if let Some(detail) = &m.detail {
        eprintln!("    {detail}");
    }
}

fn write(format: OutputFormat, measurements: &[Measurement]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Csv => {
            writeln!(out, "scenario,len,score,columns,wall_s,rss_delta_kib,status,detail")?;
            for m in measurements {
                writeln!(
                    out,
                    "{},{},{},{},{:.6},{},{},{}",
                    m.scenario,
                    m.len,
                    m.score,
                    m.columns,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.status.label(),
                    m.detail.as_deref().unwrap_or("")
                )?;
            }
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<18} {:>8} {:>10} {:>8} {:>10} {:>12} {:<12}",
                "scenario", "len", "score", "columns", "wall_s", "rss_kib", "status"
            )?;
            for m in measurements {
                writeln!(
                    out,
                    "{:<18} {:>8} {:>10} {:>8} {:>10.4} {:>12} {:<12}",
                    m.scenario,
                    m.len,
                    m.score,
                    m.columns,
                    m.wall_s,
                    m.rss_delta_kib,
                    m.status.label()
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, measurements)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i * 7 + i / 5 + offset) % ALPHABET.len()])
        .collect()
}

fn full_nw_score(s: &[u8], t: &[u8]) -> i32 {
    let mut prev: Vec<i32> = (0..=t.len() as i32).map(|j| j * GAP_PENALTY).collect();
    let mut curr = vec![0; t.len() + 1];
    for (i, &a) in s.iter().enumerate() {
        curr[0] = (i as i32 + 1) * GAP_PENALTY;
        for (j, &b) in t.iter().enumerate() {
            let sub = if a == b { MATCH_SCORE } else { MISMATCH_SCORE };
            curr[j + 1] = (prev[j] + sub)
                .max(prev[j + 1] + GAP_PENALTY)
                .max(curr[j] + GAP_PENALTY);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[t.len()]
}

fn full_lcs_len(s: &[u8], t: &[u8]) -> usize {
    let mut prev = vec![0usize; t.len() + 1];
    let mut curr = vec![0usize; t.len() + 1];
    for &a in s {
        for (j, &b) in t.iter().enumerate() {
            curr[j + 1] = if a == b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[t.len()]
}
