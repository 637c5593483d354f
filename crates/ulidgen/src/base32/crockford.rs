use crate::{
    error::{Error, Result},
    id::{MAX_TIMESTAMP, RANDOM_LEN, TIMESTAMP_LEN, ULID_LEN},
};

/// Crockford base32 alphabet. Excludes `I`, `L`, `O` and `U`.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of the canonical string form.
pub const ENCODED_LEN: usize = 26;

/// Number of leading characters that carry the timestamp (48 bits plus two
/// zero pad bits).
pub const TIMESTAMP_CHARS: usize = 10;

/// Number of trailing characters that carry the random field.
pub const RANDOM_CHARS: usize = ENCODED_LEN - TIMESTAMP_CHARS;

const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 5;
const MASK: u16 = 0x1F;

/// Lookup table for Crockford base32 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow lower-case
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[(c + 32) as usize] = i;
        }
        i += 1;
    }
    // Crockford-specific aliases
    lut[b'O' as usize] = 0;
    lut[b'o' as usize] = 0;
    lut[b'I' as usize] = 1;
    lut[b'i' as usize] = 1;
    lut[b'L' as usize] = 1;
    lut[b'l' as usize] = 1;
    lut
};

/// Slices `input` into 5-bit groups and writes one alphabet character per
/// group into `out`.
///
/// The bit stream is right-aligned: when `OUT * 5` exceeds `IN * 8`, the
/// surplus is emitted as leading zero bits in the first character. Six
/// timestamp bytes into ten characters leave two pad bits, ten random bytes
/// into sixteen characters leave none. Any other pairing of sizes fails to
/// compile.
pub(crate) fn encode_base32<const IN: usize, const OUT: usize>(
    input: &[u8; IN],
    out: &mut [u8; OUT],
) {
    const {
        assert!(OUT * BITS_PER_CHAR >= IN * 8);
        assert!(OUT * BITS_PER_CHAR - IN * 8 < BITS_PER_CHAR);
    }
    let mut bits = OUT * BITS_PER_CHAR - IN * 8;
    let mut acc = 0_u16;

    let mut pos = 0;
    for &b in input {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            out[pos] = ALPHABET[((acc >> bits) & MASK) as usize];
            pos += 1;
        }
    }
}

/// Folds Crockford characters into an integer, most significant character
/// first.
///
/// `offset` is added to the reported index on error so that callers decoding
/// a sub-slice report positions within the whole string. Input carrying more
/// bits than `T` holds is rejected with [`Error::InvalidLength`] instead of
/// losing its high bits.
pub(crate) fn decode_base32<T>(encoded: &[u8], offset: usize) -> Result<T>
where
    T: Default + From<u8> + core::ops::Shl<usize, Output = T> + core::ops::BitOr<Output = T>,
{
    if encoded.len() * BITS_PER_CHAR > core::mem::size_of::<T>() * 8 {
        return Err(Error::InvalidLength {
            len: encoded.len(),
        });
    }
    let mut acc = T::default();
    for (i, &b) in encoded.iter().enumerate() {
        let val = LOOKUP[b as usize];
        if val == NO_VALUE {
            return Err(Error::InvalidCharacter {
                byte: b,
                index: offset + i,
            });
        }
        acc = (acc << BITS_PER_CHAR) | T::from(val);
    }
    Ok(acc)
}

/// Encodes the 16-byte layout into its canonical 26-character form.
///
/// Characters 0-9 come from bytes 0-5 and characters 10-25 from bytes 6-15.
#[must_use]
pub fn encode(bytes: &[u8; ULID_LEN]) -> [u8; ENCODED_LEN] {
    let mut timestamp = [0_u8; TIMESTAMP_LEN];
    let mut random = [0_u8; RANDOM_LEN];
    timestamp.copy_from_slice(&bytes[..TIMESTAMP_LEN]);
    random.copy_from_slice(&bytes[TIMESTAMP_LEN..]);

    let mut ts_out = [0_u8; TIMESTAMP_CHARS];
    let mut rand_out = [0_u8; RANDOM_CHARS];
    encode_base32(&timestamp, &mut ts_out);
    encode_base32(&random, &mut rand_out);

    let mut out = [0_u8; ENCODED_LEN];
    out[..TIMESTAMP_CHARS].copy_from_slice(&ts_out);
    out[TIMESTAMP_CHARS..].copy_from_slice(&rand_out);
    out
}

/// Decodes a canonical (or lower-case, or alias-bearing) string back into the
/// 16-byte layout.
///
/// # Errors
/// - [`Error::InvalidLength`] unless the input is exactly 26 bytes. The
///   length is counted in UTF-8 bytes, not characters, so a 26-character
///   string holding a multi-byte character is reported here with its byte
///   length rather than as [`Error::InvalidCharacter`]
/// - [`Error::InvalidCharacter`] for the first byte outside the alphabet
/// - [`Error::InvalidTimestamp`] when the first character exceeds `7`, which
///   would need more than 48 timestamp bits
pub fn decode(s: &str) -> Result<[u8; ULID_LEN]> {
    let raw = s.as_bytes();
    if raw.len() != ENCODED_LEN {
        return Err(Error::InvalidLength { len: raw.len() });
    }
    let (ts_chars, rand_chars) = raw.split_at(TIMESTAMP_CHARS);

    let timestamp: u64 = decode_base32(ts_chars, 0)?;
    let random: u128 = decode_base32(rand_chars, TIMESTAMP_CHARS)?;
    if timestamp > MAX_TIMESTAMP {
        return Err(Error::InvalidTimestamp { timestamp });
    }

    let mut bytes = [0_u8; ULID_LEN];
    bytes[..TIMESTAMP_LEN].copy_from_slice(&timestamp.to_be_bytes()[8 - TIMESTAMP_LEN..]);
    bytes[TIMESTAMP_LEN..].copy_from_slice(&random.to_be_bytes()[16 - RANDOM_LEN..]);
    Ok(bytes)
}
