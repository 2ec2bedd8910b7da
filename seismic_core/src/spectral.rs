//! # Site Parameters and Derived Spectral Parameters
//!
//! Each design code takes its own parameter record, so the input surface is
//! a tagged union over the code selector with no default fallthrough into
//! the numeric branches. From those records this module derives the spectral
//! parameters that drive both the base shear and the design spectrum.
//!
//! ## Derivation
//!
//! - KDS / ASCE 7: `Sds = (2/3) * Fa * Ss`, `Sd1 = (2/3) * Fv * S1`, with the
//!   site coefficients looked up from the class tables (1.0 fallback).
//! - Eurocode 8: the design ground acceleration `ag` passes through, paired
//!   with a fixed soil factor S = 1.2 and corner periods TB/TC/TD. The
//!   ground type does not modify the curve in this simplified form.
//!
//! A zero acceleration input reads as "not yet provided" and fails
//! validation rather than producing a silent zero result.
//!
//! ## JSON Example
//!
//! ```json
//! { "code": "ASCE7", "site_class": "D", "risk_category": "II", "ss": 1.5, "s1": 0.6 }
//! ```
//!
//! ```json
//! { "code": "Eurocode8", "ground_type": "C", "ag": 0.25, "gamma_i": 1.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::codes::{RiskCategory, SiteClass};
//! use seismic_core::spectral::{compute_spectral_parameters, SiteAccelInput, SiteParameters, SpectralParameters};
//!
//! let site = SiteParameters::Asce7(SiteAccelInput {
//!     site_class: SiteClass::B,
//!     risk_category: RiskCategory::II,
//!     ss: 1.5,
//!     s1: 0.6,
//! });
//!
//! // Class B has Fa = Fv = 1.0, so the design values are exactly 2/3 of the
//! // mapped accelerations.
//! match compute_spectral_parameters(&site).unwrap() {
//!     SpectralParameters::TwoParameter { sds, sd1, .. } => {
//!         assert!((sds - 1.0).abs() < 1e-12);
//!         assert!((sd1 - 0.4).abs() < 1e-12);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::codes::{DesignCode, RiskCategory, SiteClass};
use crate::errors::{CalcError, CalcResult};

/// Ratio of design spectral values to the mapped (MCE-level) accelerations
pub const MCE_TO_DESIGN: f64 = 2.0 / 3.0;

/// Fixed soil factor for the simplified Eurocode 8 spectrum
pub const EC8_SOIL_FACTOR: f64 = 1.2;

/// Eurocode 8 corner period TB (s)
pub const EC8_CORNER_TB_S: f64 = 0.15;

/// Eurocode 8 corner period TC (s)
pub const EC8_CORNER_TC_S: f64 = 0.6;

/// Eurocode 8 corner period TD (s)
pub const EC8_CORNER_TD_S: f64 = 2.0;

/// Mapped-acceleration site input shared by KDS and ASCE 7
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteAccelInput {
    /// Site class (lettered for ASCE 7, S1-S3 for KDS)
    pub site_class: SiteClass,

    /// Occupancy risk category, mapped to the importance factor Ie
    pub risk_category: RiskCategory,

    /// Mapped short-period spectral acceleration Ss (g)
    pub ss: f64,

    /// Mapped one-second spectral acceleration S1 (g)
    pub s1: f64,
}

/// Ground-motion site input for Eurocode 8
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundAccelInput {
    /// Ground type (lettered; informational in this simplified form)
    pub ground_type: SiteClass,

    /// Design ground acceleration ag (g)
    pub ag: f64,

    /// Importance factor γI, supplied directly
    pub gamma_i: f64,
}

/// Code-specific site parameters
///
/// The variant is the code selector, so a caller cannot pair a code with the
/// wrong parameter record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum SiteParameters {
    /// Korean Design Standard
    #[serde(rename = "KDS")]
    Kds(SiteAccelInput),
    /// ASCE 7
    #[serde(rename = "ASCE7")]
    Asce7(SiteAccelInput),
    /// Eurocode 8
    #[serde(rename = "Eurocode8")]
    Eurocode8(GroundAccelInput),
}

impl SiteParameters {
    /// The design code this parameter record belongs to
    pub fn design_code(&self) -> DesignCode {
        match self {
            SiteParameters::Kds(_) => DesignCode::Kds,
            SiteParameters::Asce7(_) => DesignCode::Asce7,
            SiteParameters::Eurocode8(_) => DesignCode::Eurocode8,
        }
    }

    /// Importance factor for this record
    ///
    /// Derived from the risk category for KDS/ASCE 7; supplied directly as
    /// γI for Eurocode 8. The Eurocode value is validated downstream where
    /// it enters the base shear equation.
    pub fn importance_factor(&self) -> f64 {
        match self {
            SiteParameters::Kds(input) | SiteParameters::Asce7(input) => {
                input.risk_category.importance_factor()
            }
            SiteParameters::Eurocode8(input) => input.gamma_i,
        }
    }
}

/// Derived spectral parameters, one variant per spectrum family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpectralParameters {
    /// Two-parameter design spectrum (KDS / ASCE 7)
    TwoParameter {
        /// Design short-period spectral acceleration Sds (g)
        sds: f64,
        /// Design one-second spectral acceleration Sd1 (g)
        sd1: f64,
        /// Short-period site coefficient used in the derivation
        fa: f64,
        /// Long-period site coefficient used in the derivation
        fv: f64,
    },
    /// Eurocode 8 spectrum parameters
    Eurocode8 {
        /// Design ground acceleration ag (g)
        ag: f64,
        /// Soil factor S
        soil_factor: f64,
        /// Corner period TB (s)
        tb_s: f64,
        /// Corner period TC (s)
        tc_s: f64,
        /// Corner period TD (s)
        td_s: f64,
    },
}

impl SpectralParameters {
    /// The acceleration that drives the seismic coefficient
    ///
    /// Sds for the two-parameter family, ag for Eurocode 8.
    pub fn sds_equivalent(&self) -> f64 {
        match self {
            SpectralParameters::TwoParameter { sds, .. } => *sds,
            SpectralParameters::Eurocode8 { ag, .. } => *ag,
        }
    }

    /// Copy with the accelerations rounded to 3 decimals for display
    ///
    /// Downstream math always uses the full-precision original; this view
    /// only feeds read-only form fields and reports.
    pub fn display_rounded(&self) -> Self {
        fn round3(value: f64) -> f64 {
            (value * 1000.0).round() / 1000.0
        }

        match *self {
            SpectralParameters::TwoParameter { sds, sd1, fa, fv } => {
                SpectralParameters::TwoParameter {
                    sds: round3(sds),
                    sd1: round3(sd1),
                    fa,
                    fv,
                }
            }
            SpectralParameters::Eurocode8 {
                ag,
                soil_factor,
                tb_s,
                tc_s,
                td_s,
            } => SpectralParameters::Eurocode8 {
                ag: round3(ag),
                soil_factor,
                tb_s,
                tc_s,
                td_s,
            },
        }
    }
}

/// An acceleration input that must be present to proceed
///
/// Zero is treated as "not yet provided", not a legitimate physical value.
fn require_provided(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::missing_or_invalid(
            field,
            value.to_string(),
            "value must be a finite number",
        ));
    }
    if value == 0.0 {
        return Err(CalcError::missing_or_invalid(
            field,
            "0",
            "zero reads as not yet provided",
        ));
    }
    Ok(value)
}

/// Derive the spectral parameters for a site parameter record
///
/// Fails with [`CalcError::MissingOrInvalidInput`] when a required
/// acceleration is absent, non-finite, or zero.
pub fn compute_spectral_parameters(site: &SiteParameters) -> CalcResult<SpectralParameters> {
    match site {
        SiteParameters::Kds(input) | SiteParameters::Asce7(input) => {
            let ss = require_provided("ss", input.ss)?;
            let s1 = require_provided("s1", input.s1)?;
            let fa = input.site_class.fa();
            let fv = input.site_class.fv();

            Ok(SpectralParameters::TwoParameter {
                sds: MCE_TO_DESIGN * fa * ss,
                sd1: MCE_TO_DESIGN * fv * s1,
                fa,
                fv,
            })
        }
        SiteParameters::Eurocode8(input) => {
            let ag = require_provided("ag", input.ag)?;

            Ok(SpectralParameters::Eurocode8 {
                ag,
                soil_factor: EC8_SOIL_FACTOR,
                tb_s: EC8_CORNER_TB_S,
                tc_s: EC8_CORNER_TC_S,
                td_s: EC8_CORNER_TD_S,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asce7_site(site_class: SiteClass, ss: f64, s1: f64) -> SiteParameters {
        SiteParameters::Asce7(SiteAccelInput {
            site_class,
            risk_category: RiskCategory::II,
            ss,
            s1,
        })
    }

    #[test]
    fn test_class_b_is_exactly_two_thirds() {
        let params = compute_spectral_parameters(&asce7_site(SiteClass::B, 1.5, 0.6)).unwrap();
        match params {
            SpectralParameters::TwoParameter { sds, sd1, fa, fv } => {
                assert!((sds - MCE_TO_DESIGN * 1.5).abs() < 1e-12);
                assert!((sd1 - MCE_TO_DESIGN * 0.6).abs() < 1e-12);
                assert_eq!(fa, 1.0);
                assert_eq!(fv, 1.0);
            }
            _ => panic!("expected two-parameter spectrum"),
        }
    }

    #[test]
    fn test_class_d_applies_site_factors() {
        let params = compute_spectral_parameters(&asce7_site(SiteClass::D, 1.5, 0.6)).unwrap();
        match params {
            SpectralParameters::TwoParameter { sds, sd1, .. } => {
                // Fa = 1.6, Fv = 2.4
                assert!((sds - 1.6).abs() < 1e-9);
                assert!((sd1 - 0.96).abs() < 1e-9);
            }
            _ => panic!("expected two-parameter spectrum"),
        }
    }

    #[test]
    fn test_kds_ground_class_uses_default_factor() {
        let site = SiteParameters::Kds(SiteAccelInput {
            site_class: SiteClass::S2,
            risk_category: RiskCategory::II,
            ss: 1.5,
            s1: 0.6,
        });
        let params = compute_spectral_parameters(&site).unwrap();
        match params {
            SpectralParameters::TwoParameter { sds, sd1, fa, fv } => {
                assert_eq!(fa, 1.0);
                assert_eq!(fv, 1.0);
                assert!((sds - MCE_TO_DESIGN * 1.5).abs() < 1e-12);
                assert!((sd1 - MCE_TO_DESIGN * 0.6).abs() < 1e-12);
            }
            _ => panic!("expected two-parameter spectrum"),
        }
    }

    #[test]
    fn test_eurocode_passes_ag_through() {
        let site = SiteParameters::Eurocode8(GroundAccelInput {
            ground_type: SiteClass::C,
            ag: 0.25,
            gamma_i: 1.0,
        });
        let params = compute_spectral_parameters(&site).unwrap();
        match params {
            SpectralParameters::Eurocode8 {
                ag,
                soil_factor,
                tb_s,
                tc_s,
                td_s,
            } => {
                assert_eq!(ag, 0.25);
                assert_eq!(soil_factor, EC8_SOIL_FACTOR);
                assert_eq!(tb_s, EC8_CORNER_TB_S);
                assert_eq!(tc_s, EC8_CORNER_TC_S);
                assert_eq!(td_s, EC8_CORNER_TD_S);
            }
            _ => panic!("expected Eurocode 8 spectrum"),
        }
        assert_eq!(params.sds_equivalent(), 0.25);
    }

    #[test]
    fn test_zero_acceleration_is_rejected() {
        let err = compute_spectral_parameters(&asce7_site(SiteClass::D, 0.0, 0.6)).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_OR_INVALID_INPUT");
        assert_eq!(err.field(), Some("ss"));

        let err = compute_spectral_parameters(&asce7_site(SiteClass::D, 1.5, 0.0)).unwrap_err();
        assert_eq!(err.field(), Some("s1"));
    }

    #[test]
    fn test_non_finite_acceleration_is_rejected() {
        let err = compute_spectral_parameters(&asce7_site(SiteClass::D, f64::NAN, 0.6)).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_OR_INVALID_INPUT");

        let site = SiteParameters::Eurocode8(GroundAccelInput {
            ground_type: SiteClass::A,
            ag: f64::INFINITY,
            gamma_i: 1.0,
        });
        assert!(compute_spectral_parameters(&site).is_err());
    }

    #[test]
    fn test_importance_factor_sources() {
        let site = SiteParameters::Asce7(SiteAccelInput {
            site_class: SiteClass::D,
            risk_category: RiskCategory::IV,
            ss: 1.5,
            s1: 0.6,
        });
        assert_eq!(site.importance_factor(), 1.5);

        let site = SiteParameters::Eurocode8(GroundAccelInput {
            ground_type: SiteClass::B,
            ag: 0.25,
            gamma_i: 1.4,
        });
        assert_eq!(site.importance_factor(), 1.4);
    }

    #[test]
    fn test_design_code_of_each_variant() {
        assert_eq!(
            asce7_site(SiteClass::B, 1.0, 0.5).design_code(),
            DesignCode::Asce7
        );
        let kds = SiteParameters::Kds(SiteAccelInput {
            site_class: SiteClass::S1,
            risk_category: RiskCategory::II,
            ss: 1.0,
            s1: 0.5,
        });
        assert_eq!(kds.design_code(), DesignCode::Kds);
    }

    #[test]
    fn test_display_rounding_keeps_originals_intact() {
        let params = SpectralParameters::TwoParameter {
            sds: 1.23456,
            sd1: 0.98765,
            fa: 1.2,
            fv: 1.5,
        };
        match params.display_rounded() {
            SpectralParameters::TwoParameter { sds, sd1, .. } => {
                assert_eq!(sds, 1.235);
                assert_eq!(sd1, 0.988);
            }
            _ => panic!("expected two-parameter spectrum"),
        }
        // The original keeps full precision
        assert_eq!(params.sds_equivalent(), 1.23456);
    }

    #[test]
    fn test_site_parameters_serialization() {
        let site = asce7_site(SiteClass::D, 1.5, 0.6);
        let json = serde_json::to_string(&site).unwrap();
        assert!(json.contains("\"code\":\"ASCE7\""));
        assert!(json.contains("\"site_class\":\"D\""));

        let roundtrip: SiteParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(site, roundtrip);
    }

    #[test]
    fn test_spectral_parameters_serialization() {
        let params = SpectralParameters::Eurocode8 {
            ag: 0.25,
            soil_factor: EC8_SOIL_FACTOR,
            tb_s: EC8_CORNER_TB_S,
            tc_s: EC8_CORNER_TC_S,
            td_s: EC8_CORNER_TD_S,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"type\":\"Eurocode8\""));

        let roundtrip: SpectralParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, roundtrip);
    }
}
