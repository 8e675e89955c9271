//! Handle `goldbach check`.

use anyhow::Context;
use goldbach_core::entities::VerificationRecord;
use goldbach_core::responses::CheckResponse;
use goldbach_engine::{check_even, generate_primes};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output;

pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let n = args.number;

    if n < 4 || n % 2 != 0 {
        let response = CheckResponse {
            in_scope: false,
            record: VerificationRecord::out_of_scope(n),
        };
        return output::emit(&response, flags.format, || {
            format!("{n} is outside Goldbach scope (odd or below 4); nothing to check")
        });
    }

    let primes = generate_primes(n).context("prime generation failed")?;
    let response = CheckResponse {
        in_scope: true,
        record: check_even(&primes, n),
    };

    output::emit(&response, flags.format, || summary(&response.record))
}

fn summary(record: &VerificationRecord) -> String {
    record.first_pair.map_or_else(
        || format!("{}: no prime decomposition found (counterexample)", record.n),
        |pair| {
            format!(
                "{} = {} + {} ({} decomposition{})",
                record.n,
                pair.p,
                pair.q,
                record.representation_count,
                if record.representation_count == 1 {
                    ""
                } else {
                    "s"
                }
            )
        },
    )
}
