//! UUID generator.

use datagen_core::values::Value;
use rand::Rng;
use uuid::Uuid;

/// Build a version 4 UUID from the seeded rng.
///
/// `Uuid::new_v4` draws from the OS rng, which would break deterministic
/// replay, so the bytes come from the generator's rng instead.
pub fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);

    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// Generate a random UUID value.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Value {
    Value::Uuid(random_uuid(rng))
}
