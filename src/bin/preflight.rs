//! # Preflight Check
//!
//! Runs the fail-fast setup sequence the test suites depend on:
//!
//! 1. Validate credentials from the process environment (bypassed under CI).
//! 2. Assemble the fixture data and check it against the fixture schema.
//! 3. Seed the empty browser storage-state file if absent.
//!
//! This binary is the only place in the harness that terminates the process:
//! every library API reports failures as `Result` values and leaves the exit
//! decision to this entry point.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin preflight
//! ```
//!
//! ## Output Examples
//!
//! ### Successful Check
//!
//! ```text
//! ✓ Environment valid (tester@example.com)
//! ✓ Fixture schema valid
//! ✓ Storage state ready at auth/storageState.json
//! ```
//!
//! ### Error Output
//!
//! ```text
//! ❌ Environment variable validation failed:
//!
//!   • USER_EMAIL: must be a valid email address
//!   • USER_PASSWORD: must be at least 6 characters long
//!
//! 💡 Check your .env file and ensure all required variables are set.
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: Environment, fixture schema and storage state are all ready
//! - `1`: Validation failed or the storage state could not be seeded
//!
//! Under CI the credential check is bypassed and fixture schema failures are
//! reported as warnings instead of failing the run.

use conduit_testkit::env::EnvConfig;
use conduit_testkit::fixtures::{FixtureData, schema};
use conduit_testkit::setup::seed_storage_state;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let config = match EnvConfig::from_process_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("\n❌ Environment variable validation failed:\n");
            for violation in err.violations() {
                eprintln!("  • {violation}");
            }
            eprintln!("\n💡 Check your .env file and ensure all required variables are set.\n");
            process::exit(1);
        }
    };

    if config.is_ci {
        println!("✓ CI environment detected, credential validation skipped");
    } else {
        println!("✓ Environment valid ({})", config.user_email);
    }

    let fixtures = FixtureData::assemble(&config);
    match schema::check(&fixtures) {
        Ok(_) => println!("✓ Fixture schema valid"),
        // CI runs with absent credentials legitimately carry empty fixture
        // fields; keep drift in the hardcoded targets visible without
        // failing the pipeline.
        Err(err) if config.is_ci => {
            eprintln!("\n⚠ Fixture schema check failed (not fatal under CI):\n");
            for violation in &err.violations {
                eprintln!("  • {violation}");
            }
            eprintln!();
        }
        Err(err) => {
            eprintln!("\n❌ Fixture schema validation failed:\n");
            for violation in &err.violations {
                eprintln!("  • {violation}");
            }
            eprintln!();
            process::exit(1);
        }
    }

    match seed_storage_state(Path::new(".")) {
        Ok(path) => println!("✓ Storage state ready at {}", path.display()),
        Err(err) => {
            eprintln!("❌ {err}");
            process::exit(1);
        }
    }
}
