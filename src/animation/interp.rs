use std::str::FromStr;

use crate::foundation::core::Point;
use crate::foundation::error::CloudError;
use crate::model::allocation::WordPlacement;

/// How intermediate values between two keyframes are computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// Evenly spaced steps on a straight line.
    #[default]
    Linear,
}

impl InterpolationMethod {
    /// Configuration name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
        }
    }

    /// Value at step `step` of `steps` intermediate steps between `from` and
    /// `to`. Step 0 and `steps + 1` would be the endpoints themselves.
    pub fn value(self, from: f64, to: f64, step: usize, steps: usize) -> f64 {
        match self {
            Self::Linear => {
                let t = step as f64 / (steps as f64 + 1.0);
                from + t * (to - from)
            }
        }
    }

    /// Interpolate font size and left-top of one word.
    pub fn placement(
        self,
        from: &WordPlacement,
        to: &WordPlacement,
        step: usize,
        steps: usize,
    ) -> WordPlacement {
        WordPlacement::new(
            self.value(from.font_size, to.font_size, step, steps),
            Point::new(
                self.value(from.left_top.x, to.left_top.x, step, steps),
                self.value(from.left_top.y, to.left_top.y, step, steps),
            ),
        )
    }
}

impl FromStr for InterpolationMethod {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            _ => Err(CloudError::unsupported_method(s)),
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
