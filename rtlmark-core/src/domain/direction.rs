//! Text direction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction tag for a run or a whole document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Right-to-left
    Rtl,
    /// Left-to-right, the fallback for unclassified content
    #[default]
    Ltr,
}

impl Direction {
    /// Direction for the binary strong-RTL signal
    pub fn from_rtl(is_rtl: bool) -> Self {
        if is_rtl {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// Returns true for [`Direction::Rtl`]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// HTML `dir` attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = crate::api::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rtl" => Ok(Direction::Rtl),
            "ltr" => Ok(Direction::Ltr),
            other => Err(crate::api::Error::InvalidInput(format!(
                "unknown direction '{other}', expected 'rtl' or 'ltr'"
            ))),
        }
    }
}
