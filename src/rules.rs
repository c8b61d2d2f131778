//! Field validation rules.
//!
//! A [`Rule`] is a single structural check applied to one string field. Both
//! the environment validator and the fixture schema checker are driven by
//! static tables of rules evaluated uniformly, so adding a field means adding
//! a table entry rather than another ad-hoc `if`.

use crate::error::FieldViolation;
use url::Url;

/// A structural rule a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty.
    NonEmpty,
    /// Value must be a syntactically valid email address. No DNS or
    /// deliverability check.
    Email,
    /// Value must contain at least this many characters.
    MinLength(usize),
    /// Value must parse as an absolute URL with a scheme and a host.
    AbsoluteUrl,
}

impl Rule {
    /// Check `value` against this rule, reporting the failure under `field`.
    pub fn check(&self, field: &str, value: &str) -> Result<(), FieldViolation> {
        match self {
            Rule::NonEmpty => {
                if value.is_empty() {
                    return Err(FieldViolation::new(field, "is required"));
                }
            }
            Rule::Email => {
                if !is_valid_email(value) {
                    return Err(FieldViolation::new(field, "must be a valid email address"));
                }
            }
            Rule::MinLength(min) => {
                if value.chars().count() < *min {
                    return Err(FieldViolation::new(
                        field,
                        format!("must be at least {min} characters long"),
                    ));
                }
            }
            Rule::AbsoluteUrl => {
                let well_formed = Url::parse(value).is_ok_and(|url| url.has_host());
                if !well_formed {
                    return Err(FieldViolation::new(field, "must be an absolute URL"));
                }
            }
        }
        Ok(())
    }
}

/// Evaluate rules in order and return the first violation, if any.
///
/// Rules for one field are ordered from most to least fundamental (e.g.
/// `NonEmpty` before `Email`), so each failing field yields exactly one
/// diagnostic line.
pub fn first_violation(field: &str, value: &str, rules: &[Rule]) -> Option<FieldViolation> {
    rules.iter().find_map(|rule| rule.check(field, value).err())
}

/// Syntactic email check: one `@` separating a non-empty local part from a
/// domain with at least one interior dot, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    let Some((head, tail)) = domain.rsplit_once('.') else {
        return false;
    };
    !head.is_empty() && !tail.is_empty()
}
