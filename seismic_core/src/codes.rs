//! Design code selectors and code-dependent factor tables
//!
//! This module defines the supported building codes, the occupancy risk
//! categories that drive the importance factor, and the site/ground classes
//! with their short- and long-period site coefficient tables.
//!
//! # Overview
//!
//! - [`DesignCode`] - the three supported codes (KDS, ASCE 7, Eurocode 8)
//! - [`RiskCategory`] - occupancy categories I through IV and their
//!   importance factors
//! - [`SiteClass`] - lettered site classes A through E plus the KDS ground
//!   classes S1 through S3, with Fa/Fv lookups
//!
//! # Example
//!
//! ```
//! use seismic_core::codes::{DesignCode, RiskCategory, SiteClass};
//!
//! assert_eq!(RiskCategory::III.importance_factor(), 1.25);
//! assert_eq!(SiteClass::D.fa(), 1.6);
//! assert_eq!(DesignCode::Kds.site_classes().len(), 3);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported seismic design codes
///
/// Selects which formula branch applies and which input fields are relevant.
/// Serialized under the selector strings the UI layer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignCode {
    /// Korean Design Standard
    #[serde(rename = "KDS")]
    Kds,
    /// ASCE 7 (United States)
    #[serde(rename = "ASCE7")]
    Asce7,
    /// Eurocode 8 (Europe)
    #[serde(rename = "Eurocode8")]
    Eurocode8,
}

impl DesignCode {
    /// All supported codes in selector order
    pub const ALL: [DesignCode; 3] = [DesignCode::Kds, DesignCode::Asce7, DesignCode::Eurocode8];

    /// Selector string (matches the serialized form)
    pub fn code(&self) -> &'static str {
        match self {
            DesignCode::Kds => "KDS",
            DesignCode::Asce7 => "ASCE7",
            DesignCode::Eurocode8 => "Eurocode8",
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignCode::Kds => "KDS (Korea)",
            DesignCode::Asce7 => "ASCE 7 (United States)",
            DesignCode::Eurocode8 => "Eurocode 8 (Europe)",
        }
    }

    /// Parse from common string representations
    ///
    /// This is the boundary where an unknown selector can actually appear,
    /// so it is the one place that produces [`CalcError::UnsupportedCode`].
    ///
    /// # Example
    /// ```
    /// use seismic_core::codes::DesignCode;
    ///
    /// assert_eq!(DesignCode::from_str_flexible("ASCE 7").unwrap(), DesignCode::Asce7);
    /// assert!(DesignCode::from_str_flexible("IBC").is_err());
    /// ```
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "KDS" => Ok(DesignCode::Kds),
            "ASCE7" | "ASCE-7" => Ok(DesignCode::Asce7),
            "EUROCODE8" | "EUROCODE-8" | "EC8" => Ok(DesignCode::Eurocode8),
            _ => Err(CalcError::unsupported_code(s)),
        }
    }

    /// Site or ground classes a UI should offer for this code
    ///
    /// KDS uses its own S1-S3 ground classes; ASCE 7 and Eurocode 8 both use
    /// the lettered A-E list (labeled "Ground Type" under Eurocode 8).
    pub fn site_classes(&self) -> &'static [SiteClass] {
        match self {
            DesignCode::Kds => &SiteClass::KOREAN,
            DesignCode::Asce7 | DesignCode::Eurocode8 => &SiteClass::LETTERED,
        }
    }
}

impl Default for DesignCode {
    fn default() -> Self {
        DesignCode::Asce7
    }
}

impl std::fmt::Display for DesignCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Occupancy risk categories per ASCE 7 Table 1.5-1
///
/// KDS shares the same mapping to the importance factor Ie. Eurocode 8
/// supplies its importance factor directly, so this type is not used on
/// that branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Low hazard to human life (agricultural, minor storage)
    I,
    /// Ordinary buildings
    II,
    /// Substantial hazard (schools, assembly occupancies)
    III,
    /// Essential facilities (hospitals, fire stations)
    IV,
}

impl RiskCategory {
    /// All risk categories in order
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::I,
        RiskCategory::II,
        RiskCategory::III,
        RiskCategory::IV,
    ];

    /// Importance factor Ie for this category
    ///
    /// Always positive; categories I and II share 1.0.
    pub fn importance_factor(&self) -> f64 {
        match self {
            RiskCategory::I | RiskCategory::II => 1.0,
            RiskCategory::III => 1.25,
            RiskCategory::IV => 1.5,
        }
    }

    /// Roman numeral label
    pub fn code(&self) -> &'static str {
        match self {
            RiskCategory::I => "I",
            RiskCategory::II => "II",
            RiskCategory::III => "III",
            RiskCategory::IV => "IV",
        }
    }
}

impl Default for RiskCategory {
    fn default() -> Self {
        RiskCategory::II
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Site coefficient used when a class has no tabulated entry
///
/// The KDS ground classes have no Fa/Fv rows, so their accelerations pass
/// through unmodified. This fallback is deliberate policy, not an error.
pub const DEFAULT_SITE_FACTOR: f64 = 1.0;

/// Site and ground classes
///
/// The lettered classes carry tabulated site coefficients; the KDS ground
/// classes fall back to [`DEFAULT_SITE_FACTOR`] on lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteClass {
    /// Hard rock
    A,
    /// Rock
    B,
    /// Very dense soil and soft rock
    C,
    /// Stiff soil
    D,
    /// Soft clay soil
    E,
    /// KDS ground class S1
    S1,
    /// KDS ground class S2
    S2,
    /// KDS ground class S3
    S3,
}

/// Short-period site coefficient table Fa, keyed by lettered class
static SHORT_PERIOD_SITE_FACTORS: Lazy<HashMap<SiteClass, f64>> = Lazy::new(|| {
    HashMap::from([
        (SiteClass::A, 0.8),
        (SiteClass::B, 1.0),
        (SiteClass::C, 1.2),
        (SiteClass::D, 1.6),
        (SiteClass::E, 2.5),
    ])
});

/// Long-period site coefficient table Fv, keyed by lettered class
static LONG_PERIOD_SITE_FACTORS: Lazy<HashMap<SiteClass, f64>> = Lazy::new(|| {
    HashMap::from([
        (SiteClass::A, 0.8),
        (SiteClass::B, 1.0),
        (SiteClass::C, 1.5),
        (SiteClass::D, 2.4),
        (SiteClass::E, 3.5),
    ])
});

impl SiteClass {
    /// Lettered classes offered under ASCE 7 (and as Eurocode 8 ground types)
    pub const LETTERED: [SiteClass; 5] = [
        SiteClass::A,
        SiteClass::B,
        SiteClass::C,
        SiteClass::D,
        SiteClass::E,
    ];

    /// KDS ground classes
    pub const KOREAN: [SiteClass; 3] = [SiteClass::S1, SiteClass::S2, SiteClass::S3];

    /// Display label
    pub fn code(&self) -> &'static str {
        match self {
            SiteClass::A => "A",
            SiteClass::B => "B",
            SiteClass::C => "C",
            SiteClass::D => "D",
            SiteClass::E => "E",
            SiteClass::S1 => "S1",
            SiteClass::S2 => "S2",
            SiteClass::S3 => "S3",
        }
    }

    /// Short-period site coefficient Fa, falling back to
    /// [`DEFAULT_SITE_FACTOR`] for classes without a tabulated entry
    pub fn fa(&self) -> f64 {
        SHORT_PERIOD_SITE_FACTORS
            .get(self)
            .copied()
            .unwrap_or(DEFAULT_SITE_FACTOR)
    }

    /// Long-period site coefficient Fv, falling back to
    /// [`DEFAULT_SITE_FACTOR`] for classes without a tabulated entry
    pub fn fv(&self) -> f64 {
        LONG_PERIOD_SITE_FACTORS
            .get(self)
            .copied()
            .unwrap_or(DEFAULT_SITE_FACTOR)
    }
}

impl std::fmt::Display for SiteClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
