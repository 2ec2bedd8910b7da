//! # seismic_core - Seismic Load Calculation Engine
//!
//! `seismic_core` computes design seismic demand for buildings per three
//! design codes (KDS, ASCE 7, Eurocode 8): seismic coefficients, base shear
//! per horizontal axis, the vertical distribution of that shear over the
//! stories, and a 100-point design response spectrum for charting.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **UI-Agnostic**: The caller parses text and renders results; the engine
//!   only validates numbers and computes
//!
//! ## Quick Start
//!
//! ```rust
//! use seismic_core::calculations::seismic::{calculate, SeismicInput};
//! use seismic_core::codes::{RiskCategory, SiteClass};
//! use seismic_core::spectral::{SiteAccelInput, SiteParameters};
//! use seismic_core::stories::default_stories;
//!
//! let input = SeismicInput {
//!     label: "HQ Tower".to_string(),
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
//! assert!((result.v_x_kn - 1000.0).abs() < 1e-6);
//!
//! // Serialize for the UI layer to render
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("story_forces"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Calculation entry points (base shear pipeline)
//! - [`codes`] - Design codes, risk categories, site classes, factor tables
//! - [`spectral`] - Code-specific site inputs and derived spectral parameters
//! - [`spectrum`] - Design response spectrum sampling
//! - [`stories`] - Story data and vertical force distribution
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod codes;
pub mod errors;
pub mod spectral;
pub mod spectrum;
pub mod stories;

// Re-export commonly used types at crate root for convenience
pub use calculations::seismic::{calculate, BaseShear, SeismicInput, SeismicResult};
pub use codes::{DesignCode, RiskCategory, SiteClass};
pub use errors::{CalcError, CalcResult};
pub use spectral::{SiteParameters, SpectralParameters};
pub use spectrum::SpectrumPoint;
pub use stories::{Story, StoryForce};
