//! Tests for keydock error surfaces.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_raw_realm_in_override_key_reports_codec_error() {
    // The operator wrote the unsafe realm verbatim instead of encoding it.
    let line = format!("{}_{}={}", UNSAFE_REALM, ACCOUNT, GNARLY_VALUE);
    let (t, path) = Test::with_override_file(&[line.as_str()]);

    let output = t.get_with_file(UNSAFE_REALM, ACCOUNT, &path);
    assert_failure(&output);
    assert_stderr_contains(&output, "Base64");
}

#[test]
fn test_codec_error_suggests_the_key_command() {
    let (t, path) = Test::with_override_file(&["https://host.example_bob=value"]);

    let output = t.get_with_file("https://host.example", "bob", &path);
    assert_failure(&output);
    assert_stderr_contains(&output, "keydock key");
}

#[test]
fn test_codec_error_does_not_leak_the_override_value() {
    let line = format!("{}_{}=sup3r-s3cret", UNSAFE_REALM, ACCOUNT);
    let (t, path) = Test::with_override_file(&[line.as_str()]);

    let output = t.get_with_file(UNSAFE_REALM, ACCOUNT, &path);
    assert_failure(&output);
    assert_output_excludes(&output, "sup3r-s3cret");
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    t.write_config("[overrides\nbroken =");

    let output = t.get("localhost", "bob");
    assert_failure(&output);
    assert_stderr_contains(&output, "parse");
}

#[test]
fn test_conflicting_override_flags_are_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "get",
            "localhost",
            "bob",
            "--overrides",
            "overrides.env",
            "--no-overrides",
        ])
        .output()
        .expect("failed to run keydock get");

    assert_failure(&output);
}

#[test]
fn test_missing_override_file_names_the_path() {
    let t = Test::new();

    t.cmd()
        .args(["get", "localhost", "bob", "--overrides", "absent.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.env"));
}

#[test]
fn test_get_without_any_source_fails_without_leaking() {
    let t = Test::new();

    // Nothing configured at all: resolution ends at the native store. On a
    // machine with no keyring service this is a store error, otherwise a
    // not-found error — it must fail either way.
    let output = t.get("no.such.realm.invalid", "nobody");
    assert_failure(&output);
}
