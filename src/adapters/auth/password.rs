//! HMAC-SHA256 password encoder.
//!
//! Stored form: `<salt>$<hex digest>` where the digest is
//! `HMAC-SHA256(key = pepper, salt || password)` and the salt is random per
//! hash. The pepper comes from configuration and never touches storage.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::ports::PasswordEncoder;

type HmacSha256 = Hmac<Sha256>;

const SEPARATOR: char = '$';

/// Salted, peppered HMAC-SHA256 password hashing.
pub struct HmacPasswordEncoder {
    pepper: Secret<String>,
}

impl HmacPasswordEncoder {
    pub fn new(pepper: impl Into<String>) -> Self {
        Self {
            pepper: Secret::new(pepper.into()),
        }
    }

    fn digest(&self, salt: &str, raw: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.pepper.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(salt.as_bytes());
        mac.update(raw.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl PasswordEncoder for HmacPasswordEncoder {
    fn encode(&self, raw: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = self.digest(&salt, raw);
        format!("{}{}{}", salt, SEPARATOR, hex::encode(digest))
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        let Some((salt, stored_hex)) = encoded.split_once(SEPARATOR) else {
            return false;
        };
        let Ok(stored) = hex::decode(stored_hex) else {
            return false;
        };

        let expected = self.digest(salt, raw);
        expected.ct_eq(&stored).into()
    }
}
