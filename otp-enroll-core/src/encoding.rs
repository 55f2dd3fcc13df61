//! Secret encoding for manual entry
//!
//! Authenticator apps accept the shared secret as unpadded RFC 4648 Base32.

use totp_rs::Secret;

/// Turns raw secret bytes into the key a user types into an authenticator
pub trait SecretEncoder: Send + Sync {
    fn encode(&self, secret: &[u8]) -> String;
}

/// RFC 4648 Base32 without padding, as expected by authenticator apps
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Encoder;

impl SecretEncoder for Base32Encoder {
    fn encode(&self, secret: &[u8]) -> String {
        // totp-rs renders Secret::Encoded as the bare Base32 string
        Secret::Raw(secret.to_vec()).to_encoded().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base32_known_values() {
        let encoder = Base32Encoder;
        assert_eq!(encoder.encode(b"SECRET"), "KNCUGUSFKQ");
        assert_eq!(encoder.encode(b"foobar"), "MZXW6YTBOI");
        assert_eq!(encoder.encode(b"12345678901234567890"), "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ");
    }

    #[test]
    fn test_base32_empty_secret() {
        assert_eq!(Base32Encoder.encode(b""), "");
    }

    #[test]
    fn test_base32_alphabet_only() {
        let key = Base32Encoder.encode("päss wörd".as_bytes());
        assert!(!key.contains('='));
        assert!(key.chars().all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
    }
}
