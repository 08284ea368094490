//! Tests for `keydock key`.

use crate::support::*;

#[test]
fn test_key_passes_plain_realm_through() {
    let t = Test::new();

    let output = t.key(PLAIN_REALM, ACCOUNT);
    assert_success(&output);
    assert_stdout_is(&output, "localhost_Something.Plausible");
}

#[test]
fn test_key_encodes_unsafe_realm() {
    let t = Test::new();

    let output = t.key(UNSAFE_REALM, ACCOUNT);
    assert_success(&output);
    assert_stdout_is(
        &output,
        "aHR0cHM6Ly9yZWFsaXN0aWMuZG9tYWlu_Something.Plausible",
    );
}

#[test]
fn test_key_output_matches_what_resolution_expects() {
    // Author an override file using `keydock key` itself, then resolve
    // through it: the two halves of the codec must agree.
    let t = Test::new();

    let output = t.key("https://host.example:8443", "deploy");
    assert_success(&output);
    let key = stdout(&output);
    let line = format!("{}=w1red", key.trim_end());
    let path = t.write_override_file("authored.env", &[line.as_str()]);

    let output = t.get_with_file("https://host.example:8443", "deploy", &path);
    assert_success(&output);
    assert_stdout_is(&output, "w1red");
}

#[test]
fn test_key_json_output() {
    let t = Test::new();

    let output = t.key_json(UNSAFE_REALM, ACCOUNT);
    assert_success(&output);
    assert_stdout_contains(&output, "\"encoded\": true");
    assert_stdout_contains(&output, UNSAFE_REALM_TOKEN);

    let output = t.key_json(PLAIN_REALM, ACCOUNT);
    assert_success(&output);
    assert_stdout_contains(&output, "\"encoded\": false");
}
