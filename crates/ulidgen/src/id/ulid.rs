use crate::{
    base32::{self, Base32Formatter},
    error::{Error, Result},
};
use core::{cmp::Ordering, fmt, str::FromStr};

/// Size of the binary layout in bytes.
pub const ULID_LEN: usize = 16;

/// Bytes `[0, 6)` of the layout: the big-endian millisecond timestamp.
pub const TIMESTAMP_LEN: usize = 6;

/// Bytes `[6, 16)` of the layout: the random field.
pub const RANDOM_LEN: usize = ULID_LEN - TIMESTAMP_LEN;

/// Largest timestamp representable in 48 bits (`2^48 - 1`), roughly the
/// year 10889.
pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

/// Packs a millisecond timestamp into the 6-byte big-endian timestamp field.
///
/// # Errors
/// Returns [`Error::InvalidTimestamp`] if `timestamp` exceeds
/// [`MAX_TIMESTAMP`].
pub fn encode_timestamp(timestamp: u64) -> Result<[u8; TIMESTAMP_LEN]> {
    if timestamp > MAX_TIMESTAMP {
        return Err(Error::InvalidTimestamp { timestamp });
    }
    let mut out = [0_u8; TIMESTAMP_LEN];
    out.copy_from_slice(&timestamp.to_be_bytes()[8 - TIMESTAMP_LEN..]);
    Ok(out)
}

/// Splits the 16-byte layout back into its timestamp and random field.
///
/// Every 16-byte input is well formed, so this cannot fail.
#[must_use]
pub fn decode_bytes(bytes: &[u8; ULID_LEN]) -> (u64, [u8; RANDOM_LEN]) {
    let mut ts = [0_u8; 8];
    ts[8 - TIMESTAMP_LEN..].copy_from_slice(&bytes[..TIMESTAMP_LEN]);
    let mut random = [0_u8; RANDOM_LEN];
    random.copy_from_slice(&bytes[TIMESTAMP_LEN..]);
    (u64::from_be_bytes(ts), random)
}

/// A 128-bit ULID
///
/// - 48 bits timestamp (milliseconds since the Unix epoch)
/// - 80 bits random
///
/// ```text
///  Byte Index:  0              6 7            15
///              +----------------+-------------+
///  Field:      | timestamp (48) | random (80) |
///              +----------------+-------------+
///              |<-- MSB -- 128 bits -- LSB -->|
/// ```
///
/// The derived ordering compares the bytes as an unsigned big-endian integer,
/// which equals ordering by `(timestamp, random)` and also equals the
/// lexicographic ordering of the canonical strings.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Ulid {
    bytes: [u8; ULID_LEN],
}

impl Ulid {
    /// The all-zero identifier, `00000000000000000000000000`.
    pub const NIL: Self = Self::from_bytes([0; ULID_LEN]);

    /// The largest identifier, `7ZZZZZZZZZZZZZZZZZZZZZZZZZ`.
    pub const MAX: Self = Self::from_bytes([0xFF; ULID_LEN]);

    /// Concatenates a timestamp and a random field into an identifier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidTimestamp`] if `timestamp` exceeds
    /// [`MAX_TIMESTAMP`].
    pub fn from_parts(timestamp: u64, random: [u8; RANDOM_LEN]) -> Result<Self> {
        let ts = encode_timestamp(timestamp)?;
        let mut bytes = [0_u8; ULID_LEN];
        bytes[..TIMESTAMP_LEN].copy_from_slice(&ts);
        bytes[TIMESTAMP_LEN..].copy_from_slice(&random);
        Ok(Self { bytes })
    }

    /// Wraps a 16-byte layout. Every byte pattern is a valid identifier.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ULID_LEN]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ULID_LEN] {
        &self.bytes
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; ULID_LEN] {
        self.bytes
    }

    #[must_use]
    pub const fn from_u128(raw: u128) -> Self {
        Self::from_bytes(raw.to_be_bytes())
    }

    #[must_use]
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.bytes)
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        decode_bytes(&self.bytes).0
    }

    /// The 80-bit random field as big-endian bytes.
    #[must_use]
    pub fn random(&self) -> [u8; RANDOM_LEN] {
        decode_bytes(&self.bytes).1
    }

    /// The 80-bit random field as an integer.
    #[must_use]
    pub const fn random_u128(&self) -> u128 {
        self.to_u128() & ((1 << 80) - 1)
    }

    /// Compares this identifier with a raw 16-byte layout as unsigned
    /// big-endian integers.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use ulidgen::Ulid;
    ///
    /// let a = Ulid::from_parts(1, [0; 10]).unwrap();
    /// let b = Ulid::from_parts(2, [0; 10]).unwrap();
    /// assert_eq!(a.compare(b.as_bytes()), Ordering::Less);
    /// assert_eq!(a.compare(a.as_bytes()), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare(&self, other: &[u8; ULID_LEN]) -> Ordering {
        self.bytes.cmp(other)
    }

    /// Returns a formatter holding the canonical Crockford base32 encoding.
    ///
    /// ```
    /// use ulidgen::Ulid;
    ///
    /// let id = Ulid::from_u128(2_424_242_424_242_424_242);
    /// assert_eq!(id.encode(), "000000000000023953MG16DJDJ");
    /// ```
    #[must_use]
    pub fn encode(&self) -> Base32Formatter {
        Base32Formatter::new(self)
    }

    /// Decodes a 26-character Crockford base32 string.
    ///
    /// Lower-case input and the aliases `I`, `L` (as `1`) and `O` (as `0`) are
    /// accepted.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] unless the input is exactly 26 bytes
    /// - [`Error::InvalidCharacter`] for a byte outside the alphabet
    /// - [`Error::InvalidTimestamp`] if the first character is above `7`
    pub fn decode(s: impl AsRef<str>) -> Result<Self> {
        base32::decode(s.as_ref()).map(Self::from_bytes)
    }

    /// This identifier's timestamp as a calendar time, truncated to whole
    /// seconds. The millisecond value stays available via
    /// [`Ulid::timestamp`].
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        super::to_datetime(self.timestamp())
    }
}

impl From<[u8; ULID_LEN]> for Ulid {
    fn from(bytes: [u8; ULID_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Ulid> for [u8; ULID_LEN] {
    fn from(id: Ulid) -> Self {
        id.to_bytes()
    }
}

impl From<Ulid> for u128 {
    fn from(id: Ulid) -> Self {
        id.to_u128()
    }
}

impl From<Ulid> for String {
    fn from(id: Ulid) -> Self {
        id.encode().as_str().to_owned()
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode().fmt(f)
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ulid")
            .field("id", &format_args!("{}", self.encode()))
            .field("timestamp", &self.timestamp())
            .field("random", &format_args!("0x{:020x}", self.random_u128()))
            .finish()
    }
}

impl FromStr for Ulid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for Ulid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::decode(s)
    }
}

impl PartialEq<str> for Ulid {
    fn eq(&self, other: &str) -> bool {
        Self::decode(other).is_ok_and(|id| id == *self)
    }
}

impl PartialEq<&str> for Ulid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Ulid> for &str {
    fn eq(&self, other: &Ulid) -> bool {
        other == *self
    }
}
