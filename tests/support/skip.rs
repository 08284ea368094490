/// Skip a test unless a live platform keyring is opted in.
///
/// The native store talks to the real credential facility; CI runners and
/// headless shells usually have none. Set KEYDOCK_TEST_KEYRING=1 to run
/// these tests against the actual keyring.
#[macro_export]
macro_rules! skip_without_keyring {
    () => {
        if std::env::var("KEYDOCK_TEST_KEYRING").is_err() {
            eprintln!("SKIPPED: KEYDOCK_TEST_KEYRING not set");
            return;
        }
    };
}
