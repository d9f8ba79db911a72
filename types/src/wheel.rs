use serde::{Deserialize, Serialize};

/// One wedge of the spin wheel.
///
/// Order within `Settings::spin_wheel_rewards` is significant: it defines
/// segment positions on the rendered wheel, and the draw is uniform over
/// segments (duplicate values are how an admin skews the expected payout).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelSegment {
    pub value: f64,
    pub color: String,
    pub label: String,
}

impl WheelSegment {
    pub fn new(value: f64, color: &str, label: &str) -> Self {
        Self {
            value,
            color: color.to_string(),
            label: label.to_string(),
        }
    }
}
