use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sieve, verify the configured range, and write the report.
    Run(RunArgs),
    /// Generate primes only and summarize the set.
    Primes(PrimesArgs),
    /// Check a single even number's decompositions.
    Check(CheckArgs),
    /// Dump JSON schema for a report type.
    Schema(SchemaArgs),
}

/// Arguments for `goldbach run`. Every value falls back to the layered
/// configuration when the flag is absent.
#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Inclusive verification bound.
    #[arg(long)]
    pub bound: Option<u64>,

    /// First even number to verify.
    #[arg(long)]
    pub start: Option<u64>,

    /// Last even number to verify.
    #[arg(long)]
    pub end: Option<u64>,

    /// Retain a full sample every this many numbers (0 disables).
    #[arg(long)]
    pub sample_interval: Option<u64>,

    /// Emit a progress event every this many numbers (0 disables).
    #[arg(long)]
    pub progress_interval: Option<u64>,

    /// Worker threads for the verification scan.
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output directory for the report files.
    #[arg(long)]
    pub output: Option<String>,

    /// Output file stem.
    #[arg(long)]
    pub stem: Option<String>,

    /// Stream every per-number record to a JSONL file.
    #[arg(long)]
    pub stream_records: bool,

    /// Compute and print the report without writing any files.
    #[arg(long)]
    pub no_write: bool,

    /// Exit non-zero when the failure list is non-empty.
    #[arg(long)]
    pub deny_failures: bool,
}

/// Arguments for `goldbach primes`.
#[derive(Clone, Debug, Args)]
pub struct PrimesArgs {
    /// Inclusive sieve bound.
    #[arg(long)]
    pub bound: Option<u64>,

    /// How many leading primes to include in the response.
    #[arg(long, default_value_t = 10)]
    pub head: usize,
}

/// Arguments for `goldbach check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// The number to decompose.
    pub number: u64,
}

/// Arguments for `goldbach schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to dump: document, report, or record.
    #[arg(default_value = "document")]
    pub type_name: String,
}
