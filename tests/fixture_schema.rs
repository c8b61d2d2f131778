//! Fixture schema checker integration tests.

mod common;

use common::{credentials, init_logger, valid_fixtures};
use conduit_testkit::fixtures::{BaseUrlEntry, schema};

#[test]
fn well_formed_fixtures_pass_unchanged() {
    init_logger();
    let data = valid_fixtures();
    let checked = schema::check(&data).unwrap();
    assert_eq!(*checked, data);
}

#[test]
fn checking_twice_yields_the_same_result() {
    init_logger();
    let data = valid_fixtures();
    let once = schema::checked(data.clone()).unwrap();
    let twice = schema::checked(once).unwrap();
    assert_eq!(twice, data);
}

#[test]
fn not_a_url_fails_and_names_the_field() {
    init_logger();
    let mut data = valid_fixtures();
    data.ui_base_urls[0] = BaseUrlEntry::new("not-a-url");

    let err = schema::check(&data).unwrap_err();
    assert!(err.names_field("ui_base_urls[0].base_url"));
}

#[test]
fn https_example_com_passes() {
    init_logger();
    let mut data = valid_fixtures();
    data.ui_base_urls[0] = BaseUrlEntry::new("https://example.com");
    assert!(schema::check(&data).is_ok());
}

#[test]
fn default_targets_satisfy_the_url_rule() {
    init_logger();
    // The hardcoded constants must never drift out of schema.
    assert!(schema::check(&valid_fixtures()).is_ok());
}

#[test]
fn all_offending_fields_enumerated_together() {
    init_logger();
    let mut data = valid_fixtures();
    data.api_base_urls[0] = BaseUrlEntry::new("bare-string");
    data.user_credentials[0] = credentials("not-an-email", "short");

    let err = schema::check(&data).unwrap_err();
    assert_eq!(err.violations.len(), 3);
    assert!(err.names_field("api_base_urls[0].base_url"));
    assert!(err.names_field("user_credentials[0].email"));
    assert!(err.names_field("user_credentials[0].password"));
}

#[test]
fn env_password_bound_is_looser_than_fixture_bound() {
    init_logger();
    // Six characters clears the environment layer but must still fail the
    // fixture layer's eight-character rule. Two independent checks.
    let mut data = valid_fixtures();
    data.user_credentials[0] = credentials("tester@example.com", "sixsix");

    let err = schema::check(&data).unwrap_err();
    assert!(err.names_field("user_credentials[0].password"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn passwords_of_eight_or_more_pass(password in "[a-zA-Z0-9]{8,40}") {
            let mut data = valid_fixtures();
            data.user_credentials[0] = credentials("tester@example.com", &password);
            prop_assert!(schema::check(&data).is_ok());
        }

        #[test]
        fn passwords_under_eight_fail(password in "[a-zA-Z0-9]{0,7}") {
            let mut data = valid_fixtures();
            data.user_credentials[0] = credentials("tester@example.com", &password);

            let err = schema::check(&data).unwrap_err();
            prop_assert!(err.names_field("user_credentials[0].password"));
        }

        #[test]
        fn syntactically_valid_emails_pass(
            email in "[a-z][a-z0-9]{0,9}@[a-z]{1,10}\\.[a-z]{2,3}"
        ) {
            let mut data = valid_fixtures();
            data.user_credentials[0] = credentials(&email, "longenough");
            prop_assert!(schema::check(&data).is_ok());
        }
    }
}
