//! # Seismic Calculations
//!
//! Calculation entry points. Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Calculations are stateless: every invocation works on its own input
//! snapshot and produces a freshly allocated result, so identical inputs
//! always yield identical results.
//!
//! ## Available Calculations
//!
//! - [`seismic`] - Design base shear, story force distribution, and design
//!   response spectrum per KDS, ASCE 7, or Eurocode 8

pub mod seismic;

// Re-export commonly used types
pub use seismic::{calculate, BaseShear, SeismicInput, SeismicResult};
