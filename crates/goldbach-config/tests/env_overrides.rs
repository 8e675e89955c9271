//! Integration tests for `GOLDBACH_*` environment variable mapping.

use figment::{
    Figment, Jail,
    providers::{Env, Serialized},
};
use goldbach_config::GoldbachConfig;

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("GOLDBACH_RUNTIME__THREADS", "4");

        // No TOML file -- just defaults + env
        let config: GoldbachConfig = Figment::from(Serialized::defaults(GoldbachConfig::default()))
            .merge(Env::prefixed("GOLDBACH_").split("__"))
            .extract()?;

        assert_eq!(config.runtime.threads, 4);
        Ok(())
    });
}

#[test]
fn full_env_provider_chain() {
    Jail::expect_with(|jail| {
        jail.set_env("GOLDBACH_VERIFY__BOUND", "123456");
        jail.set_env("GOLDBACH_VERIFY__START", "8");
        jail.set_env("GOLDBACH_SAMPLING__SAMPLE_INTERVAL", "500");
        jail.set_env("GOLDBACH_SAMPLING__PROGRESS_INTERVAL", "2500");
        jail.set_env("GOLDBACH_OUTPUT__DIR", "jail-out");
        jail.set_env("GOLDBACH_OUTPUT__STREAM_RECORDS", "true");
        jail.set_env("GOLDBACH_RUNTIME__THREADS", "2");

        let config: GoldbachConfig = Figment::from(Serialized::defaults(GoldbachConfig::default()))
            .merge(Env::prefixed("GOLDBACH_").split("__"))
            .extract()?;

        assert_eq!(config.verify.bound, 123_456);
        assert_eq!(config.verify.start, 8);
        assert_eq!(config.sampling.sample_interval, 500);
        assert_eq!(config.sampling.progress_interval, 2500);
        assert_eq!(config.output.dir, "jail-out");
        assert!(config.output.stream_records);
        assert_eq!(config.runtime.threads, 2);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently
/// ignored. The value stays at its default because figment doesn't know
/// "boundd" should be "bound".
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("GOLDBACH_VERIFY__BOUNDD", "42");

        let config: GoldbachConfig = Figment::from(Serialized::defaults(GoldbachConfig::default()))
            .merge(Env::prefixed("GOLDBACH_").split("__"))
            .extract()?;

        assert_eq!(
            config.verify.bound, 1_000_000,
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}
