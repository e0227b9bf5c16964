//! Fixed lookup tables for the canonical string codec.
//!
//! The canonical form is `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`. Rather than
//! computing offsets per byte, the codec walks [`ENCODE`] and looks characters
//! up in [`NIBBLES`], so neither direction branches on the input.

/// Number of bytes in a UUID.
pub const BYTE_LEN: usize = 16;

/// Length of the hyphenated string form.
pub const ENCODED_LEN: usize = 36;

/// Length of the JSON form (the string form plus two quotes).
pub const JSON_LEN: usize = ENCODED_LEN + 2;

/// String offsets of the four hyphens.
pub const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Maps each byte index to the offset of its high nibble in the string form.
pub const ENCODE: [usize; BYTE_LEN] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Lowercase hex alphabet used for encoding.
pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Marks an ASCII character that is not a hex digit. Never a valid nibble.
pub const INVALID_NIBBLE: u8 = 0xff;

/// Maps every byte value to its nibble, or [`INVALID_NIBBLE`].
pub const NIBBLES: [u8; 256] = build_nibbles();

const fn build_nibbles() -> [u8; 256] {
    let mut table = [INVALID_NIBBLE; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_skips_hyphens() {
        for &offset in &ENCODE {
            assert!(!HYPHENS.contains(&offset));
            assert!(!HYPHENS.contains(&(offset + 1)));
        }
        assert_eq!(ENCODE[BYTE_LEN - 1] + 2, ENCODED_LEN);
    }

    #[test]
    fn test_nibbles_accepts_both_cases() {
        for (value, &digit) in HEX_DIGITS.iter().enumerate() {
            assert_eq!(NIBBLES[digit as usize], value as u8);
            assert_eq!(NIBBLES[digit.to_ascii_uppercase() as usize], value as u8);
        }
    }

    #[test]
    fn test_nibbles_rejects_everything_else() {
        let valid = NIBBLES.iter().filter(|&&n| n != INVALID_NIBBLE).count();
        assert_eq!(valid, 22);

        for b in [b'-', b'g', b'G', b'z', b' ', b'"', 0x00, 0x7f, 0xff] {
            assert_eq!(NIBBLES[b as usize], INVALID_NIBBLE);
        }
    }

    #[test]
    fn test_sentinel_is_out_of_range() {
        assert!(INVALID_NIBBLE > 0x0f);
    }
}
