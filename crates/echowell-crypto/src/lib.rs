/// Echowell Crypto Library
///
/// Salted password hashing for stored user credentials. Hashes are stored as
/// `"<salt-hex>:<derived-key-hex>"` using PBKDF2-HMAC-SHA512.

pub mod password;

pub use password::{hash_password, verify_password};
