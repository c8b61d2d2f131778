//! Structural schema check for fixture data.
//!
//! Re-validates the assembled [`FixtureData`] before any test consumes it:
//! every base URL must be absolute and well-formed, the account email must be
//! syntactically valid, and the password must be at least eight characters.
//! The password bound is deliberately stricter than the environment layer's
//! six-character minimum; the two layers are independent and both kept.
//!
//! The check is pure, synchronous and idempotent. Valid data passes through
//! unchanged; invalid data produces a [`SchemaViolation`] enumerating every
//! offending field.

use super::{Credentials, FixtureData};
use crate::error::{FieldViolation, SchemaViolation};
use crate::rules::{Rule, first_violation};

/// Minimum fixture password length. Stricter than the environment check.
pub const MIN_FIXTURE_PASSWORD_LEN: usize = 8;

const EMAIL_RULES: &[Rule] = &[Rule::NonEmpty, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::MinLength(MIN_FIXTURE_PASSWORD_LEN)];

/// Validate fixture data in place, returning it unchanged on success.
///
/// # Errors
///
/// Returns a [`SchemaViolation`] naming every field that fails its rule.
pub fn check(data: &FixtureData) -> Result<&FixtureData, SchemaViolation> {
    let mut violations = Vec::new();

    let url_sections: [(&str, &[super::BaseUrlEntry]); 3] = [
        ("api_base_urls", &data.api_base_urls),
        ("ui_base_urls", &data.ui_base_urls),
        ("public_api_base_urls", &data.public_api_base_urls),
    ];
    for (section, entries) in url_sections {
        for (index, entry) in entries.iter().enumerate() {
            let field = format!("{section}[{index}].base_url");
            if let Err(violation) = Rule::AbsoluteUrl.check(&field, &entry.base_url) {
                violations.push(violation);
            }
        }
    }

    for (index, credentials) in data.user_credentials.iter().enumerate() {
        check_credentials(index, credentials, &mut violations);
    }

    if violations.is_empty() {
        Ok(data)
    } else {
        Err(SchemaViolation::new(violations))
    }
}

/// Owned variant of [`check`] for call sites that pass fixture data along.
pub fn checked(data: FixtureData) -> Result<FixtureData, SchemaViolation> {
    check(&data)?;
    Ok(data)
}

fn check_credentials(index: usize, credentials: &Credentials, out: &mut Vec<FieldViolation>) {
    let email_field = format!("user_credentials[{index}].email");
    if let Some(violation) = first_violation(&email_field, &credentials.email, EMAIL_RULES) {
        out.push(violation);
    }

    let password_field = format!("user_credentials[{index}].password");
    if let Some(violation) = first_violation(&password_field, &credentials.password, PASSWORD_RULES)
    {
        out.push(violation);
    }
}
