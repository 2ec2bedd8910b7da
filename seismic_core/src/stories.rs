//! Story data and vertical force distribution
//!
//! A building is modeled as an ordered list of [`Story`] records, top story
//! first. Base shear is distributed over the stories by height-weighted
//! ratio, a first-mode linear approximation rather than the full modal
//! formula. Input order is preserved end to end because the ratios depend
//! on position.
//!
//! # Example
//!
//! ```
//! use seismic_core::stories::{default_stories, distribute_story_forces, total_weight_kn};
//!
//! let stories = default_stories(5).unwrap();
//! assert_eq!(stories[0].name, "5F");
//! assert_eq!(total_weight_kn(&stories), 5000.0);
//!
//! let forces = distribute_story_forces(&stories, 1000.0, 1000.0).unwrap();
//! let ratio_sum: f64 = forces.iter().map(|f| f.ratio).sum();
//! assert!((ratio_sum - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest story count the default builder will seed
///
/// A bound for UI usability; the calculation itself accepts any story list.
pub const MAX_STORY_COUNT: usize = 20;

/// Story height the default builder seeds (m)
pub const DEFAULT_STORY_HEIGHT_M: f64 = 4.0;

/// Story weight the default builder seeds (kN)
pub const DEFAULT_STORY_WEIGHT_KN: f64 = 1000.0;

/// One story of the building
///
/// Stories are ordered top story first. Height is expected positive and
/// weight non-negative; a story set whose height-weight products all vanish
/// is rejected at distribution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Story label (e.g., "5F")
    pub name: String,

    /// Story height in meters
    pub height_m: f64,

    /// Story weight in kilonewtons
    pub weight_kn: f64,
}

impl Story {
    /// Create a story
    pub fn new(name: impl Into<String>, height_m: f64, weight_kn: f64) -> Self {
        Story {
            name: name.into(),
            height_m,
            weight_kn,
        }
    }

    /// Height-weight product h*w used by the distribution ratio
    pub fn weighted_height(&self) -> f64 {
        self.height_m * self.weight_kn
    }
}

/// Per-story share of the base shear
///
/// Echoes the story's height and weight next to the computed ratio and
/// forces so a caller can render the distribution table directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryForce {
    /// Story label
    pub name: String,

    /// Story height in meters
    pub height_m: f64,

    /// Story weight in kilonewtons
    pub weight_kn: f64,

    /// Fraction of the base shear assigned to this story
    pub ratio: f64,

    /// Story force along the X axis (kN)
    pub fx_x_kn: f64,

    /// Story force along the Y axis (kN)
    pub fx_y_kn: f64,
}

/// Seed a story set with default heights and weights
///
/// Stories are named from the top down ("5F", "4F", ... "1F") with
/// [`DEFAULT_STORY_HEIGHT_M`] and [`DEFAULT_STORY_WEIGHT_KN`] each, matching
/// the values a form pre-fills before the user edits them. Counts outside
/// 1..=[`MAX_STORY_COUNT`] are rejected.
pub fn default_stories(count: usize) -> CalcResult<Vec<Story>> {
    if count == 0 || count > MAX_STORY_COUNT {
        return Err(CalcError::missing_or_invalid(
            "story_count",
            count.to_string(),
            format!("story count must be between 1 and {MAX_STORY_COUNT}"),
        ));
    }

    Ok((0..count)
        .map(|i| {
            Story::new(
                format!("{}F", count - i),
                DEFAULT_STORY_HEIGHT_M,
                DEFAULT_STORY_WEIGHT_KN,
            )
        })
        .collect())
}

/// Total building weight W (kN)
pub fn total_weight_kn(stories: &[Story]) -> f64 {
    stories.iter().map(|s| s.weight_kn).sum()
}

/// Sum of height-weight products over all stories
pub fn total_weighted_height(stories: &[Story]) -> f64 {
    stories.iter().map(Story::weighted_height).sum()
}

/// Total weighted height, rejected when the ratios it feeds are undefined
///
/// Fails with [`CalcError::DegenerateStoryData`] when the total is zero
/// (all heights or weights zero, or an empty story list) or not finite,
/// instead of letting NaN ratios propagate into the results.
pub fn checked_weighted_height(stories: &[Story]) -> CalcResult<f64> {
    let total = total_weighted_height(stories);
    if !total.is_finite() || total == 0.0 {
        return Err(CalcError::degenerate_story_data(
            "story heights and weights sum to a zero weighted height",
        ));
    }
    Ok(total)
}

/// Distribute the base shear over the stories
///
/// Each story receives `ratio * v_axis` where
/// `ratio = h * w / total_weighted_height`. The returned list preserves the
/// input story order.
pub fn distribute_story_forces(
    stories: &[Story],
    v_x_kn: f64,
    v_y_kn: f64,
) -> CalcResult<Vec<StoryForce>> {
    let total = checked_weighted_height(stories)?;

    Ok(stories
        .iter()
        .map(|story| {
            let ratio = story.weighted_height() / total;
            StoryForce {
                name: story.name.clone(),
                height_m: story.height_m,
                weight_kn: story.weight_kn,
                ratio,
                fx_x_kn: ratio * v_x_kn,
                fx_y_kn: ratio * v_y_kn,
            }
        })
        .collect())
}
