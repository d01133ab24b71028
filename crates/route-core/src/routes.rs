//! Mock routes and their step-by-step instructions

use serde::{Deserialize, Serialize};

use crate::modes::ModeId;

/// One leg of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Identifier, unique within the route
    pub id: String,
    /// Instruction text
    pub instruction: String,
    /// Distance covered by this step, in kilometres
    pub distance: f64,
    /// Time spent on this step, in minutes
    pub duration: u32,
}

/// A pre-computed route between the demo origin and destination
///
/// Routes are fixture data and never change once built. They are addressed
/// by the `(mode, id)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Identifier, unique within the mode
    pub id: String,
    /// Owning mode
    pub mode: ModeId,
    /// Profile id this route was planned for
    pub profile: String,
    /// Total duration in minutes
    pub duration: u32,
    /// Total distance in kilometres
    pub distance: f64,
    /// Elevation gain in metres
    pub elevation: u32,
    /// Informal quality score between 0 and 5
    pub conformity: f64,
    /// Ordered, non-empty walkthrough. The last step is the arrival.
    pub steps: Vec<Step>,
    /// Elevation samples for the chart. Unrelated to the step count.
    pub elevation_profile: Vec<i32>,
}

impl Route {
    /// Number of legs
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Step at `index`, if any
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Index of the final step
    pub fn last_step_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Whether the route climbs at all
    pub fn has_elevation_gain(&self) -> bool {
        self.elevation > 0
    }
}
