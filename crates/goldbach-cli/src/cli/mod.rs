use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `goldbach` binary.
#[derive(Debug, Parser)]
#[command(
    name = "goldbach",
    version,
    about = "Goldbach conjecture verifier - sieve, verify, report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: summary, json, raw
    #[arg(short, long, global = true, default_value = "summary")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file merged on top of the project layers
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["goldbach", "--format", "json", "--verbose", "primes"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Primes(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["goldbach", "primes", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Primes(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["goldbach", "--format", "xml", "primes"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["summary", "json", "raw"] {
            let cli = Cli::try_parse_from(["goldbach", "--format", value, "primes"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Primes(_)));
        }
    }

    #[test]
    fn run_flag_overrides_parse() {
        let cli = Cli::try_parse_from([
            "goldbach",
            "run",
            "--bound",
            "20000",
            "--threads",
            "4",
            "--deny-failures",
        ])
        .expect("cli should parse");

        let Commands::Run(args) = cli.command else {
            panic!("expected run subcommand");
        };
        assert_eq!(args.bound, Some(20_000));
        assert_eq!(args.threads, Some(4));
        assert!(args.deny_failures);
        assert!(!args.no_write);
    }

    #[test]
    fn check_requires_a_number() {
        assert!(Cli::try_parse_from(["goldbach", "check"]).is_err());
        let cli = Cli::try_parse_from(["goldbach", "check", "128"]).expect("cli should parse");
        let Commands::Check(args) = cli.command else {
            panic!("expected check subcommand");
        };
        assert_eq!(args.number, 128);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["goldbach", "--config", "/tmp/extra.toml", "primes"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some("/tmp/extra.toml"));
    }
}
