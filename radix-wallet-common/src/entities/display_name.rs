use crate::internal_prelude::*;

/// User facing name of an account or persona, at most 30 characters.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayName(String);

impl DisplayName {
    pub const MAX_LEN: usize = 30;

    pub fn new(value: impl AsRef<str>) -> Result<Self, ParseDisplayNameError> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ParseDisplayNameError::Empty);
        }
        if value.chars().count() > Self::MAX_LEN {
            return Err(ParseDisplayNameError::TooLong(Self::MAX_LEN));
        }
        Ok(Self(value.to_owned()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for DisplayName {
    type Err = ParseDisplayNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl HasSampleValues for DisplayName {
    fn sample() -> Self {
        Self("Alice".to_owned())
    }

    fn sample_other() -> Self {
        Self("Bob".to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDisplayNameError {
    Empty,
    TooLong(usize),
}

impl fmt::Display for ParseDisplayNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Display name must not be empty"),
            Self::TooLong(max) => {
                write!(f, "Display name must be at most {} characters", max)
            }
        }
    }
}

impl std::error::Error for ParseDisplayNameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        let name = DisplayName::new("Main account").unwrap();
        assert_eq!(name.value(), "Main account");
        assert_eq!(name.to_string(), "Main account");
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(
            DisplayName::new("  Spending  ").unwrap().value(),
            "Spending"
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            DisplayName::new("   "),
            Err(ParseDisplayNameError::Empty)
        );
    }

    #[test]
    fn too_long_name_is_rejected() {
        assert_eq!(
            DisplayName::new("a".repeat(31)),
            Err(ParseDisplayNameError::TooLong(30))
        );
        assert!(DisplayName::new("a".repeat(30)).is_ok());
    }
}
