//! Design response spectrum sampling
//!
//! Samples the design spectrum at a fixed 100-point period grid
//! (0.00 s to 4.95 s in 0.05 s steps). The curve family follows the derived
//! [`SpectralParameters`]: a plateau-and-decay shape for the two-parameter
//! codes, the four-branch Type 1 shape for Eurocode 8.
//!
//! The sampler assumes parameters that already passed validation; a
//! two-parameter spectrum with a zero Sds or Sd1 never reaches this module
//! because the derivation rejects it first.

use serde::{Deserialize, Serialize};

use crate::spectral::SpectralParameters;

/// Number of sampled points in a spectrum
pub const SPECTRUM_POINT_COUNT: usize = 100;

/// Period step between sampled points (s)
pub const SPECTRUM_PERIOD_STEP_S: f64 = 0.05;

/// Spectral amplification on the Eurocode 8 plateau
const EC8_AMPLIFICATION: f64 = 2.5;

/// One sampled point of the design spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumPoint {
    /// Vibration period T (s)
    pub period_s: f64,

    /// Design spectral acceleration Sa (g)
    pub acceleration_g: f64,
}

/// Two-parameter spectrum ordinate (KDS / ASCE 7)
///
/// Branches at `T0 = 0.2 * Sd1 / Sds` and `Ts = Sd1 / Sds`. The first branch
/// divides T by T0, not the reverse, so T = 0 evaluates cleanly to 0.4*Sds.
fn two_parameter_ordinate(t: f64, sds: f64, sd1: f64) -> f64 {
    let t0 = 0.2 * sd1 / sds;
    let ts = sd1 / sds;

    if t <= t0 {
        sds * (0.4 + 0.6 * t / t0)
    } else if t <= ts {
        sds
    } else {
        sd1 / t
    }
}

/// Eurocode 8 spectrum ordinate
///
/// Simplified Type 1 shape with a linear rise to the plateau. The rise uses
/// `1 + T/TB`, so the curve steps from 2.0*ag*S to the 2.5*ag*S plateau at
/// TB; the remaining corners are continuous.
fn eurocode_ordinate(t: f64, ag: f64, soil_factor: f64, tb: f64, tc: f64, td: f64) -> f64 {
    let plateau = ag * soil_factor * EC8_AMPLIFICATION;

    if t <= tb {
        ag * soil_factor * (1.0 + t / tb)
    } else if t <= tc {
        plateau
    } else if t <= td {
        plateau * (tc / t)
    } else {
        plateau * (tc * td) / (t * t)
    }
}

/// Sample the design spectrum for the given parameters
///
/// Always returns exactly [`SPECTRUM_POINT_COUNT`] points with strictly
/// increasing periods; the result is fully materialized since callers
/// consume it eagerly for charting.
///
/// # Example
///
/// ```
/// use seismic_core::spectral::SpectralParameters;
/// use seismic_core::spectrum::generate_spectrum;
///
/// let params = SpectralParameters::TwoParameter { sds: 1.0, sd1: 0.4, fa: 1.0, fv: 1.0 };
/// let spectrum = generate_spectrum(&params);
/// assert_eq!(spectrum.len(), 100);
/// assert_eq!(spectrum[0].period_s, 0.0);
/// ```
pub fn generate_spectrum(params: &SpectralParameters) -> Vec<SpectrumPoint> {
    (0..SPECTRUM_POINT_COUNT)
        .map(|i| {
            let t = i as f64 * SPECTRUM_PERIOD_STEP_S;
            let acceleration_g = match *params {
                SpectralParameters::TwoParameter { sds, sd1, .. } => {
                    two_parameter_ordinate(t, sds, sd1)
                }
                SpectralParameters::Eurocode8 {
                    ag,
                    soil_factor,
                    tb_s,
                    tc_s,
                    td_s,
                } => eurocode_ordinate(t, ag, soil_factor, tb_s, tc_s, td_s),
            };
            SpectrumPoint {
                period_s: t,
                acceleration_g,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::{EC8_CORNER_TB_S, EC8_CORNER_TC_S, EC8_CORNER_TD_S, EC8_SOIL_FACTOR};

    fn two_parameter() -> SpectralParameters {
        SpectralParameters::TwoParameter {
            sds: 1.6,
            sd1: 0.96,
            fa: 1.6,
            fv: 2.4,
        }
    }

    fn eurocode() -> SpectralParameters {
        SpectralParameters::Eurocode8 {
            ag: 0.25,
            soil_factor: EC8_SOIL_FACTOR,
            tb_s: EC8_CORNER_TB_S,
            tc_s: EC8_CORNER_TC_S,
            td_s: EC8_CORNER_TD_S,
        }
    }

    #[test]
    fn test_point_count_and_period_grid() {
        for params in [two_parameter(), eurocode()] {
            let spectrum = generate_spectrum(&params);
            assert_eq!(spectrum.len(), SPECTRUM_POINT_COUNT);
            assert_eq!(spectrum[0].period_s, 0.0);
            assert!((spectrum[99].period_s - 4.95).abs() < 1e-12);

            for pair in spectrum.windows(2) {
                assert!(pair[1].period_s > pair[0].period_s);
            }
        }
    }

    #[test]
    fn test_two_parameter_zero_period() {
        let spectrum = generate_spectrum(&two_parameter());
        // Sa(0) = 0.4 * Sds
        assert!((spectrum[0].acceleration_g - 0.4 * 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_two_parameter_plateau() {
        // T0 = 0.2 * 0.96 / 1.6 = 0.12, Ts = 0.6
        let spectrum = generate_spectrum(&two_parameter());
        for point in &spectrum {
            if point.period_s > 0.12 && point.period_s <= 0.6 {
                assert!((point.acceleration_g - 1.6).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_two_parameter_long_period_decay() {
        let spectrum = generate_spectrum(&two_parameter());
        // At T = 2.0 s (index 40): Sa = Sd1 / T
        assert!((spectrum[40].acceleration_g - 0.96 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_parameter_branch_continuity() {
        let (sds, sd1) = (1.6, 0.96);
        let t0 = 0.2 * sd1 / sds;
        let ts = sd1 / sds;

        // Rising branch meets the plateau at T0
        assert!((two_parameter_ordinate(t0, sds, sd1) - sds).abs() < 1e-12);
        // Plateau meets the decay branch at Ts
        assert!((sd1 / ts - sds).abs() < 1e-12);
    }

    #[test]
    fn test_eurocode_zero_period() {
        let spectrum = generate_spectrum(&eurocode());
        // Sa(0) = ag * S
        assert!((spectrum[0].acceleration_g - 0.25 * EC8_SOIL_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn test_eurocode_plateau_value() {
        let spectrum = generate_spectrum(&eurocode());
        // T = 0.3 s sits on the plateau
        let plateau = 0.25 * EC8_SOIL_FACTOR * 2.5;
        assert!((spectrum[6].acceleration_g - plateau).abs() < 1e-12);
    }

    #[test]
    fn test_eurocode_corner_behavior() {
        let (ag, s) = (0.25, EC8_SOIL_FACTOR);
        let (tb, tc, td) = (EC8_CORNER_TB_S, EC8_CORNER_TC_S, EC8_CORNER_TD_S);
        let plateau = ag * s * 2.5;

        // The simplified rising branch tops out at 2.0*ag*S at TB, below the
        // plateau; the step is inherited from the source formula.
        assert!((eurocode_ordinate(tb, ag, s, tb, tc, td) - 2.0 * ag * s).abs() < 1e-12);

        // TC and TD are continuous corners
        assert!((eurocode_ordinate(tc, ag, s, tb, tc, td) - plateau).abs() < 1e-12);
        let at_td = eurocode_ordinate(td, ag, s, tb, tc, td);
        let past_td = plateau * (tc * td) / (td * td);
        assert!((at_td - past_td).abs() < 1e-12);
    }

    #[test]
    fn test_eurocode_long_period_decay() {
        let spectrum = generate_spectrum(&eurocode());
        // At T = 3.0 s (index 60), beyond TD: Sa = 2.5*ag*S*(TC*TD)/T^2
        let expected = 2.5 * 0.25 * EC8_SOIL_FACTOR * (EC8_CORNER_TC_S * EC8_CORNER_TD_S) / 9.0;
        assert!((spectrum[60].acceleration_g - expected).abs() < 1e-12);
    }

    #[test]
    fn test_point_serialization_roundtrip() {
        let point = SpectrumPoint {
            period_s: 0.35,
            acceleration_g: 1.2,
        };
        let json = serde_json::to_string(&point).unwrap();
        let roundtrip: SpectrumPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, roundtrip);
    }
}
