//! US state code type.

use std::fmt;

/// Error returned when parsing an invalid state code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid state code: {reason}")]
pub struct InvalidStateCode {
    reason: &'static str,
}

/// A valid 2-letter state code (e.g. "IL", "MI").
///
/// State codes are always 2 uppercase ASCII letters. This type guarantees
/// that any `StateCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::StateCode;
///
/// let il = StateCode::parse("IL").unwrap();
/// assert_eq!(il.as_str(), "IL");
///
/// // Lowercase is rejected by `parse`, but accepted by `parse_normalized`
/// assert!(StateCode::parse("il").is_err());
/// assert_eq!(StateCode::parse_normalized(" il ").unwrap(), il);
///
/// // Wrong length is rejected
/// assert!(StateCode::parse("I").is_err());
/// assert!(StateCode::parse("ILL").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode([u8; 2]);

impl StateCode {
    /// Parse a state code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStateCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidStateCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStateCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(StateCode([bytes[0], bytes[1]]))
    }

    /// Parse a state code after trimming and uppercasing the input.
    ///
    /// Catalog files are hand-edited and often carry lowercase codes.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStateCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the state code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Debug for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateCode({})", self.as_str())
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StateCode::parse("IL").is_ok());
        assert!(StateCode::parse("MI").is_ok());
        assert!(StateCode::parse("CA").is_ok());
        assert!(StateCode::parse("AA").is_ok());
        assert!(StateCode::parse("ZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StateCode::parse("il").is_err());
        assert!(StateCode::parse("Il").is_err());
        assert!(StateCode::parse("iL").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StateCode::parse("").is_err());
        assert!(StateCode::parse("I").is_err());
        assert!(StateCode::parse("ILL").is_err());
        assert!(StateCode::parse("Illinois").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(StateCode::parse("I1").is_err());
        assert!(StateCode::parse("I-").is_err());
        assert!(StateCode::parse("I ").is_err());
        assert!(StateCode::parse("NÖ").is_err());
    }

    #[test]
    fn normalized_parse_trims_and_uppercases() {
        assert_eq!(
            StateCode::parse_normalized(" tx\n").unwrap(),
            StateCode::parse("TX").unwrap()
        );
        assert!(StateCode::parse_normalized("texas").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = StateCode::parse("OH").unwrap();
        assert_eq!(format!("{}", code), "OH");
        assert_eq!(format!("{:?}", code), "StateCode(OH)");
    }

    #[test]
    fn error_message() {
        let err = StateCode::parse("ILL").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid state code: must be exactly 2 characters"
        );
    }
}
