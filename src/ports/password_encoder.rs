//! One-way password hashing port.

/// Hashes passwords for storage and checks submitted passwords against
/// stored hashes.
pub trait PasswordEncoder: Send + Sync {
    /// Produces a storable hash of `raw`.
    fn encode(&self, raw: &str) -> String;

    /// Returns true if `raw` hashes to `encoded`.
    ///
    /// Malformed `encoded` values never match.
    fn matches(&self, raw: &str, encoded: &str) -> bool;
}
