//! Key command.
//!
//! Prints the lookup key an override source must use for a (realm, account)
//! pair. This is the remedy the codec error messages point at: regenerate
//! the key here instead of hand-encoding the realm.

use crate::core::codec;
use crate::core::constants;
use crate::error::Result;

/// Print the override lookup key.
pub fn execute(realm: &str, account: &str, json: bool) -> Result<()> {
    let key = codec::lookup_key(realm, account);

    if json {
        let result = serde_json::json!({
            "realm": realm,
            "account": account,
            "key": key,
            "encoded": !codec::is_plain(realm),
            "scheme": constants::ENCODING_SCHEME,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", key);
    }

    Ok(())
}
