//! # Seismic Base Shear Calculation
//!
//! Computes the design seismic demand for a building: seismic coefficients
//! and base shear per horizontal axis, the vertical distribution of that
//! shear over the stories, and a 100-point design response spectrum.
//!
//! ## Pipeline
//!
//! `calculate` runs four steps in sequence and short-circuits on the first
//! failure, so a caller either gets a complete result or a single tagged
//! error, never partial output:
//!
//! 1. Derive spectral parameters from the code-specific site record
//! 2. Check the story data supports a force distribution
//! 3. Compute seismic coefficients and base shear per axis
//! 4. Distribute the shear over the stories and sample the spectrum
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::calculations::seismic::{calculate, SeismicInput};
//! use seismic_core::codes::{RiskCategory, SiteClass};
//! use seismic_core::spectral::{SiteAccelInput, SiteParameters};
//! use seismic_core::stories::default_stories;
//!
//! let input = SeismicInput {
//!     label: "Office Block A".to_string(),
//!     site: SiteParameters::Asce7(SiteAccelInput {
//!         site_class: SiteClass::D,
//!         risk_category: RiskCategory::II,
//!         ss: 1.5,
//!         s1: 0.6,
//!     }),
//!     r_x: 8.0,
//!     r_y: 8.0,
//!     stories: default_stories(5).unwrap(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.cs_x - 0.2).abs() < 1e-12);
//! assert!((result.v_x_kn - 1000.0).abs() < 1e-9);
//! assert_eq!(result.spectrum.len(), 100);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::spectral::{compute_spectral_parameters, SiteParameters, SpectralParameters};
use crate::spectrum::{generate_spectrum, SpectrumPoint};
use crate::stories::{
    checked_weighted_height, distribute_story_forces, total_weight_kn, Story, StoryForce,
};

/// Input parameters for a seismic load calculation
///
/// All numeric fields are pre-parsed floating point values; the engine
/// validates them but does not parse text.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Office Block A",
///   "site": { "code": "ASCE7", "site_class": "D", "risk_category": "II", "ss": 1.5, "s1": 0.6 },
///   "r_x": 8.0,
///   "r_y": 8.0,
///   "stories": [
///     { "name": "2F", "height_m": 4.0, "weight_kn": 1000.0 },
///     { "name": "1F", "height_m": 4.0, "weight_kn": 1000.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicInput {
    /// User label for this calculation (e.g., "Office Block A")
    pub label: String,

    /// Code selector together with its code-specific site record
    pub site: SiteParameters,

    /// Response-reduction factor along the X axis
    pub r_x: f64,

    /// Response-reduction factor along the Y axis
    pub r_y: f64,

    /// Stories ordered top story first
    pub stories: Vec<Story>,
}

impl SeismicInput {
    /// Total building weight W (kN)
    pub fn total_weight_kn(&self) -> f64 {
        total_weight_kn(&self.stories)
    }
}

/// Seismic coefficients and base shear per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseShear {
    /// Seismic coefficient along the X axis
    pub cs_x: f64,

    /// Seismic coefficient along the Y axis
    pub cs_y: f64,

    /// Base shear along the X axis (kN)
    pub v_x_kn: f64,

    /// Base shear along the Y axis (kN)
    pub v_y_kn: f64,
}

/// Results from a seismic load calculation
///
/// ## JSON Example
///
/// ```json
/// {
///   "spectral": { "type": "TwoParameter", "sds": 1.6, "sd1": 0.96, "fa": 1.6, "fv": 2.4 },
///   "cs_x": 0.2,
///   "cs_y": 0.2,
///   "v_x_kn": 1000.0,
///   "v_y_kn": 1000.0,
///   "total_weight_kn": 5000.0,
///   "story_forces": [ { "name": "5F", "height_m": 4.0, "weight_kn": 1000.0,
///                       "ratio": 0.2, "fx_x_kn": 200.0, "fx_y_kn": 200.0 } ],
///   "spectrum": [ { "period_s": 0.0, "acceleration_g": 0.64 } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicResult {
    /// Derived spectral parameters (full precision; see
    /// [`SpectralParameters::display_rounded`] for the display view)
    pub spectral: SpectralParameters,

    /// Seismic coefficient along the X axis
    pub cs_x: f64,

    /// Seismic coefficient along the Y axis
    pub cs_y: f64,

    /// Base shear along the X axis (kN)
    pub v_x_kn: f64,

    /// Base shear along the Y axis (kN)
    pub v_y_kn: f64,

    /// Total building weight W used for the base shear (kN)
    pub total_weight_kn: f64,

    /// Per-story share of the base shear, in input story order
    pub story_forces: Vec<StoryForce>,

    /// Sampled design response spectrum (100 points, 0.05 s step)
    pub spectrum: Vec<SpectrumPoint>,
}

impl SeismicResult {
    /// The larger of the two axis base shears (kN)
    pub fn governing_base_shear_kn(&self) -> f64 {
        self.v_x_kn.max(self.v_y_kn)
    }

    /// Which axis governs the base shear
    pub fn governing_axis(&self) -> &'static str {
        if self.v_x_kn >= self.v_y_kn {
            "X"
        } else {
            "Y"
        }
    }
}

/// A base shear factor that must be finite and nonzero
///
/// Zero follows the same "not yet provided" convention as the acceleration
/// inputs, so a caller surfaces "enter valid inputs" rather than a numeric
/// error.
fn require_nonzero(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() || value == 0.0 {
        return Err(CalcError::division_by_zero(field, value.to_string()));
    }
    Ok(value)
}

/// Compute seismic coefficients and base shear per axis
///
/// `cs_axis = sds_equivalent / (r_axis / ie)` and `v_axis = cs_axis * W`.
///
/// Fails with [`CalcError::DivisionByZeroOrMissing`] when any argument is
/// non-finite or exactly zero.
pub fn compute_base_shear(
    sds_equivalent: f64,
    r_x: f64,
    r_y: f64,
    importance_factor: f64,
    total_weight_kn: f64,
) -> CalcResult<BaseShear> {
    let sds = require_nonzero("sds_equivalent", sds_equivalent)?;
    let r_x = require_nonzero("r_x", r_x)?;
    let r_y = require_nonzero("r_y", r_y)?;
    let ie = require_nonzero("importance_factor", importance_factor)?;
    let w = require_nonzero("total_weight_kn", total_weight_kn)?;

    let cs_x = sds / (r_x / ie);
    let cs_y = sds / (r_y / ie);

    Ok(BaseShear {
        cs_x,
        cs_y,
        v_x_kn: cs_x * w,
        v_y_kn: cs_y * w,
    })
}

/// Run the full seismic load calculation
///
/// Pure and synchronous: no state survives between calls, and identical
/// inputs produce identical results.
///
/// # Returns
///
/// * `Ok(SeismicResult)` - coefficients, base shear, story forces, spectrum
/// * `Err(CalcError)` - the first validation failure; no partial results
pub fn calculate(input: &SeismicInput) -> CalcResult<SeismicResult> {
    let spectral = compute_spectral_parameters(&input.site)?;

    // Reject degenerate story sets before the base shear step so an
    // all-zero-weight building reports as a story-data problem rather than
    // as a zero total weight.
    checked_weighted_height(&input.stories)?;

    let total_weight = input.total_weight_kn();
    let shear = compute_base_shear(
        spectral.sds_equivalent(),
        input.r_x,
        input.r_y,
        input.site.importance_factor(),
        total_weight,
    )?;

    let story_forces = distribute_story_forces(&input.stories, shear.v_x_kn, shear.v_y_kn)?;
    let spectrum = generate_spectrum(&spectral);

    debug!(
        "{}: {} W={:.1} kN Cs=({:.4}, {:.4}) V=({:.2}, {:.2}) kN",
        input.label,
        input.site.design_code(),
        total_weight,
        shear.cs_x,
        shear.cs_y,
        shear.v_x_kn,
        shear.v_y_kn,
    );

    Ok(SeismicResult {
        spectral,
        cs_x: shear.cs_x,
        cs_y: shear.cs_y,
        v_x_kn: shear.v_x_kn,
        v_y_kn: shear.v_y_kn,
        total_weight_kn: total_weight,
        story_forces,
        spectrum,
    })
}
