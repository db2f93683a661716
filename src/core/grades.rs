//! Fixed letter-grade table on a 4.0 scale
//!
//! The grade table is the single authority for which result values are valid
//! and what each one is worth. It is process-wide static configuration, never
//! derived from input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A letter grade recognized by the university portal.
///
/// Declaration order doubles as display order (best to worst), which is what
/// grade-count listings sort by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A+ (4.00)
    #[serde(rename = "A+")]
    APlus,
    /// A (3.75)
    #[serde(rename = "A")]
    A,
    /// A- (3.50)
    #[serde(rename = "A-")]
    AMinus,
    /// B+ (3.25)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.00)
    #[serde(rename = "B")]
    B,
    /// B- (2.75)
    #[serde(rename = "B-")]
    BMinus,
    /// C+ (2.50)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.25)
    #[serde(rename = "C")]
    C,
    /// D (2.00)
    #[serde(rename = "D")]
    D,
    /// F (0.00)
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// All grades in display order.
    pub const ALL: [Self; 10] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::D,
        Self::F,
    ];

    /// Grade-point value on the 4.0 scale.
    #[must_use]
    pub const fn point(self) -> f32 {
        match self {
            Self::APlus => 4.0,
            Self::A => 3.75,
            Self::AMinus => 3.5,
            Self::BPlus => 3.25,
            Self::B => 3.0,
            Self::BMinus => 2.75,
            Self::CPlus => 2.5,
            Self::C => 2.25,
            Self::D => 2.0,
            Self::F => 0.0,
        }
    }

    /// The portal's symbol for this grade.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Look up a grade by its symbol.
    ///
    /// The input is expected to be trimmed and uppercased already (the parser
    /// normalizes result cells before calling this). Unknown symbols return
    /// `None`, which is how invalid rows get rejected.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "A-" => Some(Self::AMinus),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "B-" => Some(Self::BMinus),
            "C+" => Some(Self::CPlus),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "F" => Some(Self::F),
            _ => None,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
