//! Request signing
//!
//! The API authenticates a call by a SHA-1 digest over the sorted, encoded
//! parameters with the shared secret appended directly (no HMAC, no
//! separator). The `api_signature` parameter itself is never signed.

use super::params::Params;
use crate::http::encoding::encode_form;
use chrono::Utc;
use sha1::{Digest, Sha1};
use uuid::Uuid;

/// Name of the signature parameter
pub const SIGNATURE_PARAM: &str = "api_signature";

/// Lowercase hex SHA-1 signature of `params` with `secret`.
///
/// # Examples
///
/// ```rust
/// use botr::api::{Params, signature};
///
/// let params = Params::new()
///     .with("text", "démo")
///     .with("api_format", "xml")
///     .with("api_key", "XOqEAfxj")
///     .with("api_nonce", "80684843")
///     .with("api_timestamp", "1237387851");
///
/// assert_eq!(
///     signature(&params, "uA96CFtJa138E2T5GhKfngml"),
///     "fbdee51a45980f9876834dc5ee1ec5e93f67cb89"
/// );
/// ```
pub fn signature(params: &Params, secret: &str) -> String {
    let base = encode_form(params.iter().filter(|&(name, _)| name != SIGNATURE_PARAM));

    let mut hasher = Sha1::new();
    hasher.update(base.as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Random 8-digit numeric nonce
pub fn api_nonce() -> String {
    format!("{:08}", Uuid::new_v4().as_u128() % 100_000_000)
}

/// Current Unix time in seconds
pub fn api_timestamp() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "uA96CFtJa138E2T5GhKfngml";
    const EXPECTED: &str = "fbdee51a45980f9876834dc5ee1ec5e93f67cb89";

    fn fixture_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("text", "démo"),
            ("api_format", "xml"),
            ("api_key", "XOqEAfxj"),
            ("api_nonce", "80684843"),
            ("api_timestamp", "1237387851"),
        ]
    }

    #[test]
    fn test_signature_fixture() {
        let params: Params = fixture_pairs().into_iter().collect();
        assert_eq!(signature(&params, SECRET), EXPECTED);
    }

    #[test]
    fn test_signature_independent_of_insertion_order() {
        let mut pairs = fixture_pairs();
        pairs.reverse();
        let reversed: Params = pairs.into_iter().collect();
        assert_eq!(signature(&reversed, SECRET), EXPECTED);

        let mut pairs = fixture_pairs();
        pairs.rotate_left(2);
        let rotated: Params = pairs.into_iter().collect();
        assert_eq!(signature(&rotated, SECRET), EXPECTED);
    }

    #[test]
    fn test_signature_is_idempotent() {
        let params: Params = fixture_pairs().into_iter().collect();
        let first = signature(&params, SECRET);
        let second = signature(&params, SECRET);
        assert_eq!(first, second);
        assert_eq!(first.len(), 40);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_ignores_existing_signature() {
        let params: Params = fixture_pairs().into_iter().collect();
        let signed = params.clone().with(SIGNATURE_PARAM, "stale");
        assert_eq!(signature(&signed, SECRET), EXPECTED);
    }

    #[test]
    fn test_signature_depends_on_secret_and_values() {
        let params: Params = fixture_pairs().into_iter().collect();
        assert_ne!(signature(&params, "another secret"), EXPECTED);

        let changed = params.with("text", "demo");
        assert_ne!(signature(&changed, SECRET), EXPECTED);
    }

    #[test]
    fn test_signature_encodes_spaces_as_percent_20() {
        // sha1("a=b%20c" + "s")
        let params = Params::new().with("a", "b c");
        let mut hasher = Sha1::new();
        hasher.update(b"a=b%20cs");
        assert_eq!(signature(&params, "s"), hex::encode(hasher.finalize()));
    }

    #[test]
    fn test_api_nonce_format() {
        for _ in 0..32 {
            let nonce = api_nonce();
            assert_eq!(nonce.len(), 8);
            assert!(nonce.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_api_timestamp_is_recent() {
        let timestamp = api_timestamp();
        assert!(timestamp > 1_600_000_000);
    }
}
