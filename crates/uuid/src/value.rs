//! The UUID value type and its codecs.
//!
//! Three representations are supported:
//! - the canonical hyphenated string (36 bytes),
//! - the raw binary form (16 bytes, byte order preserved),
//! - the JSON form (the canonical string in double quotes, 38 bytes).

use crate::tables::{
    BYTE_LEN, ENCODE, ENCODED_LEN, HEX_DIGITS, HYPHENS, INVALID_NIBBLE, JSON_LEN, NIBBLES,
};
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// A 128-bit universally unique identifier of any version.
///
/// Equality is byte-wise. Any 16 bytes form a valid value; only identifiers produced by a
/// [`Generator`](crate::Generator) are guaranteed to carry the version 4 and RFC 4122 variant
/// bits.
///
/// # Display format
/// Displays in the canonical lowercase hyphenated form, e.g.
/// `123e4567-e89b-12d3-a456-426614174000`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uuid([u8; BYTE_LEN]);

impl Uuid {
    /// Wraps 16 raw bytes.
    pub const fn from_bytes(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// The all-zero UUID.
    pub const fn nil() -> Self {
        Self([0; BYTE_LEN])
    }

    pub fn is_nil(&self) -> bool {
        self.0 == [0; BYTE_LEN]
    }

    pub const fn as_bytes(&self) -> &[u8; BYTE_LEN] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; BYTE_LEN] {
        self.0
    }

    /// Writes the canonical string form into `buf`.
    ///
    /// Every byte of `buf` is overwritten.
    pub fn encode_into(&self, buf: &mut [u8; ENCODED_LEN]) {
        for &i in &HYPHENS {
            buf[i] = b'-';
        }
        for (&byte, &j) in self.0.iter().zip(ENCODE.iter()) {
            buf[j] = HEX_DIGITS[(byte >> 4) as usize];
            buf[j + 1] = HEX_DIGITS[(byte & 0x0f) as usize];
        }
    }

    /// Returns the canonical string form as ASCII bytes.
    pub fn encode(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        self.encode_into(&mut buf);
        buf
    }

    /// Parses the canonical hyphenated form.
    ///
    /// Hex digits may be upper or lower case. The version and variant bits are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidFormat`] if `input` is not exactly 36 bytes, a hyphen is
    /// missing or misplaced, or any other position is not a hex digit.
    pub fn parse(input: &str) -> UuidResult<Self> {
        Self::parse_bytes(input.as_bytes())
    }

    /// Like [`Uuid::parse`] but accepts a byte slice.
    pub fn parse_bytes(buf: &[u8]) -> UuidResult<Self> {
        if buf.len() != ENCODED_LEN {
            return Err(UuidError::InvalidFormat);
        }
        if HYPHENS.iter().any(|&i| buf[i] != b'-') {
            return Err(UuidError::InvalidFormat);
        }

        let mut bytes = [0u8; BYTE_LEN];
        for (byte, &j) in bytes.iter_mut().zip(ENCODE.iter()) {
            let hi = NIBBLES[buf[j] as usize];
            let lo = NIBBLES[buf[j + 1] as usize];
            if hi == INVALID_NIBBLE || lo == INVALID_NIBBLE {
                return Err(UuidError::InvalidFormat);
            }
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Like [`Uuid::parse`] but panics on invalid input.
    ///
    /// Intended for constants and tests.
    ///
    /// # Panics
    ///
    /// Panics if `input` is not a canonical UUID string.
    #[track_caller]
    pub fn must_parse(input: &str) -> Self {
        match Self::parse(input) {
            Ok(uuid) => uuid,
            Err(e) => panic!("{e}: '{input}'"),
        }
    }

    /// Returns the binary form: the 16 bytes, unchanged.
    pub const fn to_binary(&self) -> [u8; BYTE_LEN] {
        self.0
    }

    /// Reads the binary form from the first 16 bytes of `data`.
    ///
    /// Trailing bytes beyond the first 16 are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidLength`] if `data` is shorter than 16 bytes.
    pub fn from_binary(data: &[u8]) -> UuidResult<Self> {
        let head = data.get(..BYTE_LEN).ok_or(UuidError::InvalidLength {
            expected: BYTE_LEN,
            actual: data.len(),
        })?;
        let mut bytes = [0u8; BYTE_LEN];
        bytes.copy_from_slice(head);
        Ok(Self(bytes))
    }

    /// Returns the JSON form: the canonical string wrapped in double quotes.
    pub fn to_json(&self) -> [u8; JSON_LEN] {
        let mut buf = [b'"'; JSON_LEN];
        let mut inner = [0u8; ENCODED_LEN];
        self.encode_into(&mut inner);
        buf[1..JSON_LEN - 1].copy_from_slice(&inner);
        buf
    }

    /// Parses the JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidFormat`] unless `buf` is exactly 38 bytes, starts and ends
    /// with `"`, and holds a canonical UUID string in between.
    pub fn from_json(buf: &[u8]) -> UuidResult<Self> {
        if buf.len() != JSON_LEN || buf[0] != b'"' || buf[JSON_LEN - 1] != b'"' {
            return Err(UuidError::InvalidFormat);
        }
        Self::parse_bytes(&buf[1..JSON_LEN - 1])
    }
}

impl From<[u8; BYTE_LEN]> for Uuid {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; BYTE_LEN] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = UuidError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Uuid::from_binary(data)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.encode();
        // Only hex digits and hyphens are ever written
        let s = std::str::from_utf8(&buf).map_err(|_| fmt::Error)?;
        f.pad(s)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({self})")
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Equivalent to [`Uuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}
