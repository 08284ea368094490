//! Tests for `keydock set` against the platform keyring.
//!
//! These need a live credential facility; they are opt-in via
//! KEYDOCK_TEST_KEYRING (see tests/support/skip.rs). Realms are
//! uuid-suffixed so parallel runs cannot collide.

use crate::skip_without_keyring;
use crate::support::*;

fn test_realm(prefix: &str) -> String {
    // Hex-only uuid keeps the realm safelisted, so override keys in these
    // tests can use it verbatim.
    format!("{}.{}.keydock.test", prefix, uuid::Uuid::new_v4().simple())
}

#[test]
fn test_set_then_get_roundtrip() {
    skip_without_keyring!();

    let t = Test::new();
    let realm = test_realm("roundtrip");

    let output = t.set(&realm, "username", "P@sSw0Rd");
    assert_success(&output);
    assert_stdout_contains(&output, "stored");

    let output = t.get_no_overrides(&realm, "username");
    assert_success(&output);
    assert_stdout_is(&output, "P@sSw0Rd");
}

#[test]
fn test_set_reports_overwrite() {
    skip_without_keyring!();

    let t = Test::new();
    let realm = test_realm("overwrite");

    let output = t.set(&realm, "bob", "first");
    assert_success(&output);
    assert_stdout_contains(&output, "stored");

    let output = t.set(&realm, "bob", "second");
    assert_success(&output);
    assert_stdout_contains(&output, "replaced");

    let output = t.get_no_overrides(&realm, "bob");
    assert_success(&output);
    assert_stdout_is(&output, "second");
}

#[test]
fn test_set_does_not_echo_the_value() {
    skip_without_keyring!();

    let t = Test::new();
    let realm = test_realm("echo");

    let output = t.set(&realm, "bob", "d0-not-pr1nt");
    assert_success(&output);
    assert_output_excludes(&output, "d0-not-pr1nt");
}

#[test]
fn test_get_miss_names_realm_and_account() {
    skip_without_keyring!();

    let t = Test::new();
    let realm = test_realm("missing");

    let output = t.get_no_overrides(&realm, "nobody");
    assert_failure(&output);
    assert_stderr_contains(&output, &realm);
    assert_stderr_contains(&output, "nobody");
}

#[test]
fn test_override_wins_over_stored_value() {
    skip_without_keyring!();

    let t = Test::new();
    let realm = test_realm("precedence");

    let output = t.set(&realm, "bob", "from-native");
    assert_success(&output);

    let line = format!("{}_bob=from-override", realm);
    let path = t.write_override_file("overrides.env", &[line.as_str()]);
    let output = t.get_with_file(&realm, "bob", &path);
    assert_success(&output);
    assert_stdout_is(&output, "from-override");

    // Without the override source the native value is still there.
    let output = t.get_no_overrides(&realm, "bob");
    assert_success(&output);
    assert_stdout_is(&output, "from-native");
}
