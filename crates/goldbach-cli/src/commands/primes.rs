//! Handle `goldbach primes`.

use anyhow::Context;
use goldbach_core::responses::PrimesResponse;
use goldbach_engine::generate_primes;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PrimesArgs;
use crate::output;
use crate::progress::Progress;

pub fn handle(args: &PrimesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = crate::bootstrap::load_config(flags)?;
    let bound = args.bound.unwrap_or(config.verify.bound);

    let spinner = Progress::spinner(&format!("sieving primes up to {bound}"));
    let primes = generate_primes(bound).context("prime generation failed")?;
    spinner.finish_clear();

    let response = PrimesResponse {
        bound,
        count: primes.len() as u64,
        largest: primes.largest(),
        head: primes.iter().take(args.head).collect(),
    };

    output::emit(&response, flags.format, || {
        let largest = response
            .largest
            .map_or_else(|| String::from("none"), |p| p.to_string());
        format!(
            "{} primes <= {} (largest: {})\nhead: {:?}",
            response.count, response.bound, largest, response.head
        )
    })
}
