//! Static test fixtures.
//!
//! [`FixtureData`] bundles the known target environments (UI host, API host,
//! public API host) with the credentials taken from the validated environment
//! configuration. Assembly is pure and infallible; structural validity is
//! enforced separately by [`schema::check`], so the provider itself has no
//! error path.

pub mod schema;

use crate::env::EnvConfig;
use serde::{Deserialize, Serialize};

/// Fixed target for exercise API tests.
pub const API_BASE_URL: &str = "https://www.automationexercise.com";
/// Fixed target for browser-driven UI tests.
pub const UI_BASE_URL: &str = "https://demo.realworld.show";
/// Fixed target for the public RealWorld REST API.
pub const PUBLIC_API_BASE_URL: &str = "https://api.realworld.show/api";

/// One base URL entry. Kept as a single-field record inside an ordered
/// sequence to preserve the fixture file shape tests index into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUrlEntry {
    pub base_url: String,
}

impl BaseUrlEntry {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// A test account's credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The assembled fixture object consumed by the test suites.
///
/// Effectively immutable after assembly: accessors are read-only and the
/// value is safe for unsynchronized concurrent reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureData {
    pub api_base_urls: Vec<BaseUrlEntry>,
    pub ui_base_urls: Vec<BaseUrlEntry>,
    pub public_api_base_urls: Vec<BaseUrlEntry>,
    pub user_credentials: Vec<Credentials>,
}

impl FixtureData {
    /// Assemble fixture data from an already-validated configuration.
    ///
    /// Deterministic and pure: hardcoded base URLs plus a copy of the
    /// configured credentials. Any invalidity is deferred to
    /// [`schema::check`].
    pub fn assemble(config: &EnvConfig) -> Self {
        Self {
            api_base_urls: vec![BaseUrlEntry::new(API_BASE_URL)],
            ui_base_urls: vec![BaseUrlEntry::new(UI_BASE_URL)],
            public_api_base_urls: vec![BaseUrlEntry::new(PUBLIC_API_BASE_URL)],
            user_credentials: vec![Credentials {
                email: config.user_email.clone(),
                password: config.user_password.clone(),
            }],
        }
    }

    /// Primary public API base URL, if present.
    pub fn public_api_base_url(&self) -> Option<&str> {
        self.public_api_base_urls
            .first()
            .map(|entry| entry.base_url.as_str())
    }

    /// Primary UI base URL, if present.
    pub fn ui_base_url(&self) -> Option<&str> {
        self.ui_base_urls
            .first()
            .map(|entry| entry.base_url.as_str())
    }

    /// Primary test account credentials, if present.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.user_credentials.first()
    }
}
