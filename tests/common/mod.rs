//! Shared helpers for the integration suites.

use conduit_testkit::env::{USER_EMAIL, USER_PASSWORD};
use conduit_testkit::{Credentials, EnvConfig, FixtureData};
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Initialize logging once for the whole test binary.
pub fn init_logger() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build an environment snapshot from string pairs.
pub fn env_snapshot(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A snapshot carrying valid interactive-mode credentials.
pub fn valid_env() -> Vec<(String, String)> {
    env_snapshot(&[
        (USER_EMAIL, "tester@example.com"),
        (USER_PASSWORD, "longenough"),
    ])
}

/// Fixture data that satisfies every schema rule.
pub fn valid_fixtures() -> FixtureData {
    let config = EnvConfig::from_vars(valid_env()).expect("valid snapshot");
    FixtureData::assemble(&config)
}

/// Credentials value for direct fixture surgery in tests.
pub fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}
