//! Train number type.

use std::fmt;

/// Error returned when parsing an invalid train number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {reason}")]
pub struct InvalidTrainNumber {
    reason: &'static str,
}

/// A public Indian Railways train number, always five digits (e.g. "12951").
///
/// This is the number printed on tickets. The upstream also assigns each
/// train an opaque internal id, which is carried separately on
/// [`Train::train_id`](super::Train).
///
/// # Examples
///
/// ```
/// use rail_server::domain::TrainNumber;
///
/// let no = TrainNumber::parse("12951").unwrap();
/// assert_eq!(no.as_str(), "12951");
///
/// assert!(TrainNumber::parse("1295").is_err());
/// assert!(TrainNumber::parse("1295A").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrainNumber(String);

impl TrainNumber {
    /// Parse a train number. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidTrainNumber> {
        let s = s.trim();

        if s.len() != 5 {
            return Err(InvalidTrainNumber {
                reason: "must be exactly 5 digits",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTrainNumber {
                reason: "must contain only digits",
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the train number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.0)
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
