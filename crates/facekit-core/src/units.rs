//! Unit conversion utilities
//!
//! Normalizes caller-supplied geometry and feed-rate values to the single
//! internal unit system used by the planners: millimeters and mm/min.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Geometry (length) unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GeometryUnit {
    /// Millimeters
    Millimeter,
    /// Inches
    Inch,
}

impl GeometryUnit {
    const ALIASES: &'static [(&'static str, GeometryUnit)] = &[
        ("mm", GeometryUnit::Millimeter),
        ("millimeter", GeometryUnit::Millimeter),
        ("millimeters", GeometryUnit::Millimeter),
        ("in", GeometryUnit::Inch),
        ("inch", GeometryUnit::Inch),
        ("inches", GeometryUnit::Inch),
    ];

    /// Multiplier that takes a value in this unit to millimeters
    pub fn mm_factor(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Inch => MM_PER_INCH,
        }
    }
}

impl Default for GeometryUnit {
    fn default() -> Self {
        Self::Millimeter
    }
}

impl fmt::Display for GeometryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millimeter => write!(f, "mm"),
            Self::Inch => write!(f, "in"),
        }
    }
}

impl FromStr for GeometryUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, unit)| *unit)
            .ok_or_else(|| Error::UnsupportedUnit {
                kind: "geometry",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for GeometryUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<GeometryUnit> for String {
    fn from(unit: GeometryUnit) -> Self {
        unit.to_string()
    }
}

/// Feed rate unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RateUnit {
    /// Millimeters per minute
    MmPerMin,
    /// Inches per minute
    InPerMin,
}

impl RateUnit {
    const ALIASES: &'static [(&'static str, RateUnit)] = &[
        ("mm/min", RateUnit::MmPerMin),
        ("in/min", RateUnit::InPerMin),
        ("inch/min", RateUnit::InPerMin),
        ("inches/min", RateUnit::InPerMin),
    ];

    /// Multiplier that takes a rate in this unit to mm/min
    pub fn mm_per_min_factor(self) -> f64 {
        match self {
            Self::MmPerMin => 1.0,
            Self::InPerMin => MM_PER_INCH,
        }
    }
}

impl Default for RateUnit {
    fn default() -> Self {
        Self::MmPerMin
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MmPerMin => write!(f, "mm/min"),
            Self::InPerMin => write!(f, "in/min"),
        }
    }
}

impl FromStr for RateUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, unit)| *unit)
            .ok_or_else(|| Error::UnsupportedUnit {
                kind: "rate",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for RateUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RateUnit> for String {
    fn from(unit: RateUnit) -> Self {
        unit.to_string()
    }
}

/// Convert a length to millimeters
pub fn to_mm(value: f64, unit: GeometryUnit) -> f64 {
    value * unit.mm_factor()
}

/// Convert a feed rate to mm/min
pub fn to_mm_per_min(value: f64, unit: RateUnit) -> f64 {
    value * unit.mm_per_min_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_aliases() {
        for alias in ["mm", "MM", "millimeter", "Millimeters", " mm "] {
            assert_eq!(alias.parse::<GeometryUnit>().unwrap(), GeometryUnit::Millimeter);
        }
        for alias in ["in", "IN", "inch", "Inches"] {
            assert_eq!(alias.parse::<GeometryUnit>().unwrap(), GeometryUnit::Inch);
        }
    }

    #[test]
    fn test_rate_aliases() {
        assert_eq!("mm/min".parse::<RateUnit>().unwrap(), RateUnit::MmPerMin);
        assert_eq!("MM/MIN".parse::<RateUnit>().unwrap(), RateUnit::MmPerMin);
        assert_eq!("in/min".parse::<RateUnit>().unwrap(), RateUnit::InPerMin);
        assert_eq!("inch/min".parse::<RateUnit>().unwrap(), RateUnit::InPerMin);
    }

    #[test]
    fn test_unsupported_units() {
        let err = "cm".parse::<GeometryUnit>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedUnit { kind: "geometry", .. }));

        let err = "mm/sec".parse::<RateUnit>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedUnit { kind: "rate", .. }));

        assert!("feet".parse::<GeometryUnit>().is_err());
        assert!("".parse::<RateUnit>().is_err());
    }

    #[test]
    fn test_conversion() {
        assert_eq!(to_mm(10.0, GeometryUnit::Millimeter), 10.0);
        assert_eq!(to_mm(2.0, GeometryUnit::Inch), 50.8);
        assert_eq!(to_mm_per_min(80.0, RateUnit::InPerMin), 2032.0);
        assert_eq!(to_mm_per_min(1500.0, RateUnit::MmPerMin), 1500.0);
        assert_eq!(to_mm(1.0, "inches".parse().unwrap()), 25.4);
    }

    #[test]
    fn test_round_trip() {
        for x in [0.001, 0.1, 1.0, 3.3, 254.0, 1234.5678] {
            let back = to_mm(to_mm(x, GeometryUnit::Inch) / MM_PER_INCH, GeometryUnit::Millimeter);
            assert!((back - x).abs() < 1e-9, "{} != {}", back, x);
        }
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(GeometryUnit::Inch.to_string(), "in");
        assert_eq!(RateUnit::MmPerMin.to_string(), "mm/min");

        let json = serde_json::to_string(&RateUnit::InPerMin).unwrap();
        assert_eq!(json, "\"in/min\"");
        let unit: GeometryUnit = serde_json::from_str("\"Inches\"").unwrap();
        assert_eq!(unit, GeometryUnit::Inch);
        assert!(serde_json::from_str::<GeometryUnit>("\"furlong\"").is_err());
    }
}
