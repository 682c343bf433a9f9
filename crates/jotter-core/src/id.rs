//! Random short-code identifiers for notes.
//!
//! Identifiers use the 64-symbol url-safe alphabet (`A-Za-z0-9_-`), so a
//! 16-character code carries 96 bits of randomness.

use rand::Rng;

use crate::defaults::NOTE_ID_LENGTH;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a fresh note identifier.
pub fn generate_note_id() -> String {
    let mut rng = rand::thread_rng();
    (0..NOTE_ID_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
