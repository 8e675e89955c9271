//! Handle `goldbach run`: sieve, verify, seal, persist, report.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use chrono::Utc;
use goldbach_config::GoldbachConfig;
use goldbach_core::entities::{ReportDocument, ReportMetadata, VerificationRecord};
use goldbach_core::responses::RunResponse;
use goldbach_engine::{ProgressEvent, ProgressObserver, VerifyOptions, generate_primes, verify_range};
use goldbach_report::{RecordWriter, seal_document, write_report};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::output;
use crate::progress::Progress;

/// Flag overrides merged over the layered configuration.
struct RunSettings {
    bound: u64,
    start: u64,
    end: u64,
    options: VerifyOptions,
    dir: PathBuf,
    stem: String,
    stream_records: bool,
    no_write: bool,
    deny_failures: bool,
}

impl RunSettings {
    fn resolve(args: &RunArgs, config: &GoldbachConfig) -> Self {
        let bound = args.bound.unwrap_or(config.verify.bound);
        let end = args.end.unwrap_or_else(|| {
            if config.verify.end == 0 {
                bound
            } else {
                config.verify.end
            }
        });
        let stream_records = args.stream_records || config.output.stream_records;
        let mut threads = args.threads.unwrap_or(config.runtime.threads);
        if stream_records && threads > 1 {
            // JSONL lines must come out in ascending n order.
            tracing::warn!("record streaming forces the sequential scan");
            threads = 1;
        }

        Self {
            bound,
            start: args.start.unwrap_or(config.verify.start),
            end,
            options: VerifyOptions {
                sample_interval: args
                    .sample_interval
                    .unwrap_or(config.sampling.sample_interval),
                progress_interval: args
                    .progress_interval
                    .unwrap_or(config.sampling.progress_interval),
                threads,
            },
            dir: PathBuf::from(args.output.clone().unwrap_or_else(|| config.output.dir.clone())),
            stem: args.stem.clone().unwrap_or_else(|| config.output.stem.clone()),
            stream_records,
            no_write: args.no_write,
            deny_failures: args.deny_failures,
        }
    }
}

/// Bridges the engine's observation hooks onto the progress bar and the
/// optional record stream.
struct ScanObserver {
    bar: Progress,
    stream: Option<Mutex<RecordWriter>>,
}

impl ProgressObserver for ScanObserver {
    fn on_progress(&self, event: &ProgressEvent) {
        self.bar.set_position(event.processed);
        self.bar.set_message(&format!(
            "{} ok, {} failed, {:.0}/s",
            event.successes, event.failures, event.per_second
        ));
    }

    fn on_record(&self, record: &VerificationRecord) {
        if let Some(stream) = &self.stream
            && let Ok(mut writer) = stream.lock()
            && let Err(error) = writer.write(record)
        {
            tracing::warn!(%error, "record stream write failed");
        }
    }
}

/// Handle `goldbach run`.
pub fn handle(args: &RunArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = crate::bootstrap::load_config(flags)?;
    let settings = RunSettings::resolve(args, &config);

    let spinner = Progress::spinner(&format!("sieving primes up to {}", settings.bound));
    let primes = generate_primes(settings.bound).context("prime generation failed")?;
    spinner.finish_ok(&format!("{} primes <= {}", primes.len(), settings.bound));

    let records_path = (settings.stream_records && !settings.no_write)
        .then(|| settings.dir.join(format!("{}.records.jsonl", settings.stem)));
    let stream = records_path
        .as_deref()
        .map(RecordWriter::create)
        .transpose()
        .context("failed to open record stream")?;

    let total_numbers = settings.end.saturating_sub(settings.start) / 2 + 1;
    let observer = ScanObserver {
        bar: Progress::bar(total_numbers, "verifying"),
        stream: stream.map(Mutex::new),
    };

    let report = verify_range(
        &primes,
        settings.start,
        settings.end,
        &settings.options,
        &observer,
    )
    .context("range verification failed")?;

    let ScanObserver { bar, stream } = observer;
    bar.finish_clear();
    if let Some(stream) = stream {
        let writer = stream
            .into_inner()
            .map_err(|_| anyhow::anyhow!("record stream lock poisoned"))?;
        writer.finish().context("failed to flush record stream")?;
    }

    let document = seal_document(ReportDocument {
        metadata: ReportMetadata {
            tool: String::from("goldbach"),
            version: String::from(env!("CARGO_PKG_VERSION")),
            generated_at: Utc::now(),
            bound: settings.bound,
            algorithm: String::from("eratosthenes-sieve/exhaustive-pair-scan"),
        },
        report,
        integrity_hash: None,
    })
    .context("failed to seal report document")?;

    let paths = if settings.no_write {
        None
    } else {
        Some(
            write_report(&settings.dir, &settings.stem, &document)
                .context("failed to persist report")?,
        )
    };

    let failure_count = document.report.failures.len();
    let response = RunResponse {
        report_path: paths
            .as_ref()
            .map(|p| p.report.display().to_string()),
        hash_path: paths.as_ref().map(|p| p.hash.display().to_string()),
        records_path: records_path.map(|p| p.display().to_string()),
        document,
    };

    output::emit(&response, flags.format, || run_summary(&response))?;

    if settings.deny_failures && failure_count > 0 {
        anyhow::bail!("{failure_count} counterexamples recorded");
    }
    Ok(())
}

fn run_summary(response: &RunResponse) -> String {
    let report = &response.document.report;
    let stats = &report.statistics;
    let perf = &report.performance;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Goldbach verification of [{}, {}]",
        report.range.start, report.range.end
    );
    let _ = writeln!(out, "  numbers tested         {}", report.total_numbers);
    let _ = writeln!(
        out,
        "  verified               {}",
        report.successful_verifications
    );
    let _ = writeln!(out, "  counterexamples        {}", report.failures.len());
    let _ = writeln!(
        out,
        "  total representations  {}",
        report.total_representations
    );
    let _ = writeln!(
        out,
        "  representations        min {} / max {} / avg {:.2}",
        stats.min_representations, stats.max_representations, stats.avg_representations
    );
    let _ = writeln!(
        out,
        "  elapsed                {:.2}s ({:.0} numbers/s)",
        perf.elapsed_seconds, perf.numbers_per_second
    );
    let _ = writeln!(out, "  success rate           {:.8}", perf.success_rate);
    if let Some(path) = &response.report_path {
        let hash = response
            .document
            .integrity_hash
            .as_deref()
            .unwrap_or("unsealed");
        let _ = writeln!(out, "  report                 {path}");
        let _ = writeln!(out, "  sha-256                {hash}");
    }
    if let Some(path) = &response.records_path {
        let _ = writeln!(out, "  record stream          {path}");
    }

    if report.failures.is_empty() {
        let _ = write!(out, "No counterexamples found.");
    } else {
        let preview: Vec<String> = report
            .failures
            .iter()
            .take(5)
            .map(ToString::to_string)
            .collect();
        let _ = write!(
            out,
            "COUNTEREXAMPLES FOUND: {}{}",
            preview.join(", "),
            if report.failures.len() > 5 { ", ..." } else { "" }
        );
    }
    out
}
