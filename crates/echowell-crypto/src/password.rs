use rand::RngCore;
use sha2::Sha512;

pub const SALT_LEN: usize = 16;
pub const KEY_LEN: usize = 64;
pub const ITERATIONS: u32 = 1000;

/// Hash a plaintext password into a storable `salt:hash` string.
///
/// The hex text of the salt (not the raw bytes) is fed to the KDF, which
/// keeps stored hashes compatible with records written by the old server.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    let salt = hex::encode(salt);

    let key = derive_key(password, &salt);
    format!("{}:{}", salt, hex::encode(key))
}

/// Check a plaintext password against a stored `salt:hash` string.
/// Malformed stored values never match.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected_hex)) = stored.split_once(':') else {
        return false;
    };
    if salt.is_empty() || expected_hex.contains(':') {
        return false;
    }

    let Ok(expected) = hex::decode(expected_hex) else {
        return false;
    };
    if expected.len() != KEY_LEN {
        return false;
    }

    let actual = derive_key(password, salt);
    constant_time_eq(&actual, &expected)
}

fn derive_key(password: &str, salt: &str) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), ITERATIONS, &mut key);
    key
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
