//! Authentication adapters.
//!
//! Implementations of the auth ports:
//!
//! - `password` - Salted, peppered HMAC-SHA256 `PasswordEncoder`
//! - `static_user_store` - `UserStore` holding the configured account
//! - `in_memory_sessions` - `SessionStore` with an idle timeout

mod in_memory_sessions;
mod password;
mod static_user_store;

pub use in_memory_sessions::InMemorySessionStore;
pub use password::HmacPasswordEncoder;
pub use static_user_store::StaticUserStore;
