use crate::{
    animation::interp::InterpolationMethod,
    foundation::core::Canvas,
    foundation::error::{CloudError, CloudResult},
    layout::magnetic::{MagneticAllocator, MagneticSettings},
    layout::strategy::{AllocationStrategy, StrategyKind},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Parameters of a whole animation build.
///
/// Every field has a default, so a JSON config only needs the fields it
/// changes.
pub struct CloudConfig {
    /// Output canvas.
    #[serde(default)]
    pub canvas: Canvas,
    /// Words shown per timestamp; lighter words are dropped.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Font size of the heaviest word.
    #[serde(default = "default_max_font_size")]
    pub max_font_size: f64,
    /// Font size of the lightest word, also used for the opening frame.
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f64,
    /// Static allocation strategy.
    #[serde(default)]
    pub allocation_strategy: StrategyKind,
    /// Frontier resolution: steps per canvas axis.
    #[serde(default = "default_image_division")]
    pub image_division: u32,
    /// Free margin around every placed word, in pixels.
    #[serde(default = "default_one")]
    pub collision_buffer: f64,
    /// Weight of the distance a word moves between keyframes.
    #[serde(default = "default_one")]
    pub movement_weight: f64,
    /// Weight of the distance of a word to the canvas center.
    #[serde(default = "default_one")]
    pub center_weight: f64,
    /// Search the four frontier sides in parallel.
    #[serde(default)]
    pub parallel_sides: bool,
    /// Keep magnetically placed words fully inside the canvas.
    #[serde(default = "default_true")]
    pub confine_to_canvas: bool,
    /// Joins the two labels of a transition frame.
    #[serde(default = "default_transition_symbol")]
    pub transition_symbol: String,
    /// Synthetic frames between two keyframes.
    #[serde(default = "default_n_frames")]
    pub n_frames_for_interpolation: usize,
    /// Interpolation method name; see [`InterpolationMethod`].
    #[serde(default = "default_interpolation_method")]
    pub interpolation_method: String,
    /// Label of the opening frame in which the first words wait off-canvas.
    /// `None` starts directly with the first timestamp.
    #[serde(default = "default_starting_label")]
    pub starting_label: Option<String>,
    /// Seed of the off-canvas placement randomness.
    #[serde(default)]
    pub seed: u64,
    /// Display time of a synthetic frame.
    #[serde(default = "default_duration_per_frame_ms")]
    pub duration_per_frame_ms: u64,
    /// Display time of a keyframe.
    #[serde(default = "default_keyframe_duration_ms")]
    pub keyframe_duration_ms: u64,
}

fn default_max_words() -> usize {
    100
}

fn default_max_font_size() -> f64 {
    50.0
}

fn default_min_font_size() -> f64 {
    10.0
}

fn default_image_division() -> u32 {
    300
}

fn default_one() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_transition_symbol() -> String {
    "_to_".to_string()
}

fn default_n_frames() -> usize {
    20
}

fn default_interpolation_method() -> String {
    InterpolationMethod::Linear.name().to_string()
}

fn default_starting_label() -> Option<String> {
    Some("start".to_string())
}

fn default_duration_per_frame_ms() -> u64 {
    50
}

fn default_keyframe_duration_ms() -> u64 {
    1000
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            max_words: default_max_words(),
            max_font_size: default_max_font_size(),
            min_font_size: default_min_font_size(),
            allocation_strategy: StrategyKind::default(),
            image_division: default_image_division(),
            collision_buffer: default_one(),
            movement_weight: default_one(),
            center_weight: default_one(),
            parallel_sides: false,
            confine_to_canvas: default_true(),
            transition_symbol: default_transition_symbol(),
            n_frames_for_interpolation: default_n_frames(),
            interpolation_method: default_interpolation_method(),
            starting_label: default_starting_label(),
            seed: 0,
            duration_per_frame_ms: default_duration_per_frame_ms(),
            keyframe_duration_ms: default_keyframe_duration_ms(),
        }
    }
}

impl CloudConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> CloudResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field, including the interpolation method name.
    pub fn validate(&self) -> CloudResult<()> {
        self.canvas.validate()?;
        if self.max_words == 0 {
            return Err(CloudError::validation("max_words must be > 0"));
        }
        if !(self.min_font_size.is_finite() && self.min_font_size > 0.0) {
            return Err(CloudError::validation("min_font_size must be finite and > 0"));
        }
        if !self.max_font_size.is_finite() || self.max_font_size < self.min_font_size {
            return Err(CloudError::validation(
                "max_font_size must be finite and >= min_font_size",
            ));
        }
        if self.image_division == 0 {
            return Err(CloudError::validation("image_division must be >= 1"));
        }
        for (name, value) in [
            ("collision_buffer", self.collision_buffer),
            ("movement_weight", self.movement_weight),
            ("center_weight", self.center_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CloudError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        self.interpolation()?;
        Ok(())
    }

    /// Parsed [`Self::interpolation_method`].
    pub fn interpolation(&self) -> CloudResult<InterpolationMethod> {
        self.interpolation_method.parse()
    }

    /// Magnetic tunables carried by this config.
    pub fn magnetic_settings(&self) -> MagneticSettings {
        MagneticSettings {
            image_division: self.image_division,
            collision_buffer: self.collision_buffer,
            movement_weight: self.movement_weight,
            center_weight: self.center_weight,
            parallel_sides: self.parallel_sides,
            confine_to_canvas: self.confine_to_canvas,
        }
    }

    /// Strategy selected by [`Self::allocation_strategy`].
    pub fn strategy(&self) -> CloudResult<AllocationStrategy> {
        Ok(match self.allocation_strategy {
            StrategyKind::Magnetic => AllocationStrategy::Magnetic(MagneticAllocator::new(
                self.canvas,
                self.magnetic_settings(),
            )?),
            StrategyKind::Random => AllocationStrategy::Random {
                canvas: self.canvas,
            },
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
