use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ReadCollectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Forward,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Reverse,
}

impl Strand {
    pub fn as_char(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }

    ///
    /// Parse a strand column where `*` and `.` mean "no strand".
    ///
    pub fn parse_optional(s: &str) -> Result<Option<Strand>, ReadCollectionError> {
        match s {
            "*" | "." => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl FromStr for Strand {
    type Err = ReadCollectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Err(ReadCollectionError::InvalidStrand(s.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
