//! Client-side identifier generation.

use rand::RngCore;

const ID_BYTES: usize = 12;

/// Generate a record/timer id the vendor accepts as a unique key
/// inside a batch envelope: 12 random bytes, lowercase hex encoded
/// (24 characters on the wire).
pub fn generate_id() -> String {
    let mut bytes = [0u8; ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
