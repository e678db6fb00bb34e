//! Letter grade for a site's CO₂ per page view.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EcoRating {
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl EcoRating {
    /// Best to worst.
    pub const ALL: [EcoRating; 7] = [
        Self::APlus,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// Wire representation (`A_PLUS`, `A`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A_PLUS",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Label shown to users (`A+`, `A`, ...)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            other => other.as_str(),
        }
    }

    /// Half-open band `[min, max)` of grams CO₂ per page view.
    pub fn co2_band(&self) -> (f64, f64) {
        match self {
            Self::APlus => (0.0, 0.1),
            Self::A => (0.1, 0.3),
            Self::B => (0.3, 0.5),
            Self::C => (0.5, 0.8),
            Self::D => (0.8, 1.2),
            Self::E => (1.2, 2.0),
            Self::F => (2.0, f64::MAX),
        }
    }

    /// Grade for a measurement. Values outside every band (negative, NaN)
    /// grade as `F`.
    pub fn from_co2(co2_grams: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|rating| {
                let (min, max) = rating.co2_band();
                co2_grams >= min && co2_grams < max
            })
            .unwrap_or(Self::F)
    }
}

impl FromStr for EcoRating {
    type Err = CoreError;

    /// Accepts both the wire form and the display form.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A_PLUS" | "A+" | "APLUS" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(CoreError::InvalidEcoRating {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for EcoRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
