//! Unit types and conversion constants
//!
//! Provides the closed set of supported units and the pairwise conversion
//! factor table.

use serde::{Deserialize, Serialize};

/// A supported measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Centimeters,
    Meters,
    Feet,
    Millimeters,
    Kg,
    Lb,
}

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Length units (cm, m, ft, mm)
    Length,
    /// Mass units (kg, lb)
    Mass,
}

impl Unit {
    /// All supported units, in selector order
    pub const ALL: [Unit; 6] = [
        Unit::Centimeters,
        Unit::Meters,
        Unit::Feet,
        Unit::Millimeters,
        Unit::Kg,
        Unit::Lb,
    ];

    /// Canonical label for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Centimeters => "Centimeters",
            Unit::Meters => "Meters",
            Unit::Feet => "Feet",
            Unit::Millimeters => "Millimeters",
            Unit::Kg => "Kg",
            Unit::Lb => "Lb",
        }
    }

    /// Parse from string, accepting common abbreviations
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "centimeters" | "centimeter" | "cm" => Some(Unit::Centimeters),
            "meters" | "meter" | "m" => Some(Unit::Meters),
            "feet" | "foot" | "ft" => Some(Unit::Feet),
            "millimeters" | "millimeter" | "mm" => Some(Unit::Millimeters),
            "kg" | "kilograms" | "kilogram" => Some(Unit::Kg),
            "lb" | "lbs" | "pounds" | "pound" => Some(Unit::Lb),
            _ => None,
        }
    }

    /// The category this unit measures in
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Centimeters | Unit::Meters | Unit::Feet | Unit::Millimeters => {
                UnitCategory::Length
            }
            Unit::Kg | Unit::Lb => UnitCategory::Mass,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Length Conversion Constants
// ============================================================================

/// Meters per centimeter
pub const M_PER_CM: f64 = 0.01;
/// Feet per centimeter
pub const FT_PER_CM: f64 = 0.0328084;
/// Millimeters per centimeter
pub const MM_PER_CM: f64 = 10.0;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;
/// Feet per meter
pub const FT_PER_M: f64 = 3.28084;
/// Millimeters per meter
pub const MM_PER_M: f64 = 1000.0;
/// Centimeters per foot
pub const CM_PER_FT: f64 = 30.48;
/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Millimeters per foot
pub const MM_PER_FT: f64 = 304.8;
/// Centimeters per millimeter
pub const CM_PER_MM: f64 = 0.1;
/// Meters per millimeter
pub const M_PER_MM: f64 = 0.001;
/// Feet per millimeter
pub const FT_PER_MM: f64 = 0.00328084;

// ============================================================================
// Mass Conversion Constants
// ============================================================================

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

// ============================================================================
// Factor Resolution
// ============================================================================

/// Get the multiplier that converts a value in `from` into a value in `to`.
///
/// Exact-match lookup over the supported ordered pairs. Any pair outside the
/// table, including a unit paired with itself and cross-category pairs like
/// Meters to Kg, yields 1.0. Each factor is an independent literal; nothing is
/// derived through a base unit.
pub fn resolve_factor(from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Centimeters, Unit::Meters) => M_PER_CM,
        (Unit::Centimeters, Unit::Feet) => FT_PER_CM,
        (Unit::Centimeters, Unit::Millimeters) => MM_PER_CM,
        (Unit::Meters, Unit::Centimeters) => CM_PER_M,
        (Unit::Meters, Unit::Feet) => FT_PER_M,
        (Unit::Meters, Unit::Millimeters) => MM_PER_M,
        (Unit::Feet, Unit::Centimeters) => CM_PER_FT,
        (Unit::Feet, Unit::Meters) => M_PER_FT,
        (Unit::Feet, Unit::Millimeters) => MM_PER_FT,
        (Unit::Millimeters, Unit::Centimeters) => CM_PER_MM,
        (Unit::Millimeters, Unit::Meters) => M_PER_MM,
        (Unit::Millimeters, Unit::Feet) => FT_PER_MM,
        (Unit::Kg, Unit::Lb) => LB_PER_KG,
        (Unit::Lb, Unit::Kg) => KG_PER_LB,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_factors() {
        assert_eq!(resolve_factor(Unit::Centimeters, Unit::Meters), 0.01);
        assert_eq!(resolve_factor(Unit::Centimeters, Unit::Feet), 0.0328084);
        assert_eq!(resolve_factor(Unit::Centimeters, Unit::Millimeters), 10.0);
        assert_eq!(resolve_factor(Unit::Meters, Unit::Centimeters), 100.0);
        assert_eq!(resolve_factor(Unit::Meters, Unit::Feet), 3.28084);
        assert_eq!(resolve_factor(Unit::Meters, Unit::Millimeters), 1000.0);
        assert_eq!(resolve_factor(Unit::Feet, Unit::Centimeters), 30.48);
        assert_eq!(resolve_factor(Unit::Feet, Unit::Meters), 0.3048);
        assert_eq!(resolve_factor(Unit::Feet, Unit::Millimeters), 304.8);
        assert_eq!(resolve_factor(Unit::Millimeters, Unit::Centimeters), 0.1);
        assert_eq!(resolve_factor(Unit::Millimeters, Unit::Meters), 0.001);
        assert_eq!(resolve_factor(Unit::Millimeters, Unit::Feet), 0.00328084);
    }

    #[test]
    fn test_mass_factors() {
        assert_eq!(resolve_factor(Unit::Kg, Unit::Lb), 2.20462);
        assert_eq!(resolve_factor(Unit::Lb, Unit::Kg), 0.453592);
    }

    #[test]
    fn test_same_unit_defaults_to_one() {
        for unit in Unit::ALL {
            assert_eq!(resolve_factor(unit, unit), 1.0);
        }
    }

    #[test]
    fn test_cross_category_defaults_to_one() {
        assert_eq!(resolve_factor(Unit::Meters, Unit::Kg), 1.0);
        assert_eq!(resolve_factor(Unit::Kg, Unit::Feet), 1.0);
        assert_eq!(resolve_factor(Unit::Lb, Unit::Millimeters), 1.0);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Unit::from_str("Centimeters"), Some(Unit::Centimeters));
        assert_eq!(Unit::from_str("cm"), Some(Unit::Centimeters));
        assert_eq!(Unit::from_str("M"), Some(Unit::Meters));
        assert_eq!(Unit::from_str("ft"), Some(Unit::Feet));
        assert_eq!(Unit::from_str("mm"), Some(Unit::Millimeters));
        assert_eq!(Unit::from_str("kilograms"), Some(Unit::Kg));
        assert_eq!(Unit::from_str("lbs"), Some(Unit::Lb));
        assert_eq!(Unit::from_str("furlong"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(Unit::Feet.category(), UnitCategory::Length);
        assert_eq!(Unit::Millimeters.category(), UnitCategory::Length);
        assert_eq!(Unit::Kg.category(), UnitCategory::Mass);
        assert_eq!(Unit::Lb.category(), UnitCategory::Mass);
    }
}
