// src/transform.rs
use crate::args::Direction;

/// Shift every byte by +1 (encrypt) or -1 (decrypt), wrapping at the
/// 0-255 boundary. Stateless and length-preserving, so encrypting then
/// decrypting (or the reverse) is an exact identity.
pub fn apply(direction: Direction, data: &mut [u8]) {
    for byte in data.iter_mut() {
        *byte = match direction {
            Direction::Encrypt => byte.wrapping_add(1),
            Direction::Decrypt => byte.wrapping_sub(1),
        };
    }
}
