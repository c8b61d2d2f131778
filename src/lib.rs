//! End-to-end and API test harness for a RealWorld ("conduit") demo app.
//!
//! Validates user signup/login flows against the public REST API, with
//! environment-driven credentials and schema-validated test fixtures.
//!
//! # Core Components
//!
//! - [`env::EnvConfig`] - fail-fast environment credential validation
//! - [`fixtures::FixtureData`] - static fixture data with a structural schema check
//! - [`http::ApiClient`] - single-attempt HTTP request wrapper
//! - [`api`] - signup/login/user helpers over the conduit wire format
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use conduit_testkit::env::EnvConfig;
//! use conduit_testkit::fixtures::{FixtureData, schema};
//! use conduit_testkit::http::ApiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = EnvConfig::from_process_env()?;
//! let fixtures = schema::checked(FixtureData::assemble(&config))?;
//! let client = ApiClient::from_fixtures(&fixtures)?;
//! let user = conduit_testkit::api::signup(&client, "a@b.com", "testpassword123", "tester").await?;
//! # Ok(())
//! # }
//! ```
//!
//! Validation failures are aggregated: every failing field is reported in one
//! error. The library never exits the process; the `preflight` binary is the
//! sole entry point that turns validation failure into a non-zero exit.

pub mod api;
pub mod env;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod rules;
pub mod setup;

// Re-export commonly used types for convenience
pub use api::{TestUser, User, UserEnvelope, UserUpdate, unique_test_user};
pub use env::EnvConfig;
pub use error::{
    EnvError, FieldViolation, RequestError, SchemaViolation, SetupError, TestkitError,
    TestkitResult,
};
pub use fixtures::{Credentials, FixtureData};
pub use http::{ApiClient, RequestOptions};
pub use setup::{StorageState, seed_storage_state};
