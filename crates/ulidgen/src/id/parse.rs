use super::Ulid;
use crate::error::Result;
use std::time::{Duration, SystemTime};

/// Recovers the millisecond timestamp from a canonical string.
///
/// The whole string is decoded, so an invalid character anywhere is
/// reported even though only the first ten characters carry the timestamp.
/// Use [`Ulid::decode`] when the random field is needed as well.
///
/// # Errors
/// - [`Error::InvalidLength`] unless the input is exactly 26 bytes
/// - [`Error::InvalidCharacter`] for a byte outside the alphabet
/// - [`Error::InvalidTimestamp`] if the first character is above `7`
///
/// # Example
/// ```
/// use ulidgen::{Error, parse};
///
/// assert_eq!(parse("01G00RPN3GNQDPDEA8MJAJS8SJ"), Ok(1_649_293_350_000));
/// assert_eq!(
///     parse("01G00RPN3GXT7N2G5ZR6AW6TR"),
///     Err(Error::InvalidLength { len: 25 })
/// );
/// ```
///
/// [`Error::InvalidLength`]: crate::Error::InvalidLength
/// [`Error::InvalidCharacter`]: crate::Error::InvalidCharacter
/// [`Error::InvalidTimestamp`]: crate::Error::InvalidTimestamp
pub fn parse(s: &str) -> Result<u64> {
    Ulid::decode(s).map(|id| id.timestamp())
}

/// Converts a millisecond timestamp into a calendar time at one-second
/// resolution. Sub-second precision is dropped.
#[must_use]
pub fn to_datetime(timestamp_ms: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(timestamp_ms / 1_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parse_returns_the_timestamp() {
        assert_eq!(parse("01G00RPN3GNQDPDEA8MJAJS8SJ").unwrap(), 1_649_293_350_000);
        assert_eq!(parse("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap(), 1_469_922_850_259);
        assert_eq!(parse("00000000000000000000000000").unwrap(), 0);
    }

    #[test]
    fn parse_rejects_short_input() {
        assert_eq!(
            parse("01G00RPN3GXT7N2G5ZR6AW6TR"),
            Err(Error::InvalidLength { len: 25 })
        );
        // only the timestamp field
        assert_eq!(
            parse("01G00RPN3G"),
            Err(Error::InvalidLength { len: 10 })
        );
    }

    #[test]
    fn parse_rejects_invalid_random_characters() {
        assert_eq!(
            parse("01G00RPN3GNQDPDEA8MJAJS8S*"),
            Err(Error::InvalidCharacter {
                byte: b'*',
                index: 25
            })
        );
    }

    #[test]
    fn datetime_truncates_to_seconds() {
        // 2022-04-07T01:02:30.045Z
        let expected = SystemTime::UNIX_EPOCH + Duration::from_secs(1_649_293_350);
        assert_eq!(to_datetime(1_649_293_350_045), expected);
        assert_eq!(to_datetime(1_649_293_350_999), expected);

        let id = Ulid::decode("01G00RPN3GNQDPDEA8MJAJS8SJ").unwrap();
        assert_eq!(id.datetime(), expected);
    }
}
