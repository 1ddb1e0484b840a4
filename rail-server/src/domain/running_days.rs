//! Weekly running-days bitmask.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when a running-days field cannot be turned into a mask.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid running days: {reason}")]
pub struct InvalidRunningDays {
    reason: &'static str,
}

/// Which days of the week a train runs on.
///
/// Index 0 is Monday and index 6 is Sunday, the same order
/// [`weekday_index`](super::weekday_index) uses. On the wire this is a
/// 7-character string of `'0'`/`'1'`, e.g. `"1010100"` for Monday,
/// Wednesday and Friday.
///
/// # Examples
///
/// ```
/// use rail_server::domain::RunningDays;
///
/// let days = RunningDays::parse("1010100").unwrap();
/// assert!(days.runs_on(0));
/// assert!(!days.runs_on(1));
///
/// // Short masks are padded with non-running days
/// assert_eq!(RunningDays::parse("11").unwrap().to_string(), "1100000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunningDays([bool; 7]);

impl RunningDays {
    /// A train that runs every day.
    pub const DAILY: Self = Self([true; 7]);

    /// Parse an upstream running-days field.
    ///
    /// Missing trailing days default to "does not run". An empty field, more
    /// than seven characters, or anything other than `0`/`1` is rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidRunningDays> {
        if s.is_empty() {
            return Err(InvalidRunningDays {
                reason: "field is empty",
            });
        }

        if s.len() > 7 {
            return Err(InvalidRunningDays {
                reason: "more than 7 days",
            });
        }

        let mut days = [false; 7];
        for (day, b) in s.bytes().enumerate() {
            days[day] = match b {
                b'1' => true,
                b'0' => false,
                _ => {
                    return Err(InvalidRunningDays {
                        reason: "expected only '0' or '1'",
                    });
                }
            };
        }

        Ok(Self(days))
    }

    /// Whether the train runs on the given weekday (0 = Monday).
    ///
    /// Out-of-range indices are treated as non-running days.
    pub fn runs_on(&self, weekday: usize) -> bool {
        self.0.get(weekday).copied().unwrap_or(false)
    }

    /// Number of days per week the train runs.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&d| d).count()
    }
}

impl fmt::Display for RunningDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &day in &self.0 {
            f.write_str(if day { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for RunningDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RunningDays({self})")
    }
}

impl Serialize for RunningDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_mask() {
        let days = RunningDays::parse("1111100").unwrap();
        assert_eq!(days.count(), 5);
        assert!(days.runs_on(4));
        assert!(!days.runs_on(5));
        assert!(!days.runs_on(6));
    }

    #[test]
    fn short_mask_padded_with_zeroes() {
        let days = RunningDays::parse("001").unwrap();
        assert_eq!(days.to_string(), "0010000");
    }

    #[test]
    fn reject_empty() {
        assert!(RunningDays::parse("").is_err());
    }

    #[test]
    fn reject_too_long() {
        assert!(RunningDays::parse("11111111").is_err());
    }

    #[test]
    fn reject_bad_chars() {
        let err = RunningDays::parse("11Y1111").unwrap_err();
        assert_eq!(err.to_string(), "invalid running days: expected only '0' or '1'");
    }

    #[test]
    fn out_of_range_day_does_not_run() {
        assert!(!RunningDays::DAILY.runs_on(7));
    }

    #[test]
    fn serializes_as_string() {
        let days = RunningDays::parse("0101010").unwrap();
        assert_eq!(serde_json::to_string(&days).unwrap(), "\"0101010\"");
    }
}
