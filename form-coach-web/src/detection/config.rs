//! Detection thresholds
//!
//! Defaults reproduce the tuned values the detectors were built around.
//! A partial JSON document can override any field; everything else keeps
//! its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Rejected threshold configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{exercise}: {reason}")]
    Invalid {
        exercise: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(exercise: &'static str, reason: &'static str) -> Self {
        Self::Invalid { exercise, reason }
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushupConfig {
    /// Either elbow below this = bottom of the rep (°)
    pub down_angle: f32,
    /// Both elbows above this = arms locked out (°)
    pub up_angle: f32,
    /// Either arm under this percent = "lower your chest"
    pub shallow_percent: f32,
    /// Both arms over this percent = "fully extend"
    pub lockout_percent: f32,
}

impl Default for PushupConfig {
    fn default() -> Self {
        Self {
            down_angle: 90.0,
            up_angle: 170.0,
            shallow_percent: 50.0,
            lockout_percent: 95.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatConfig {
    /// Knee above this arms the rep (standing)
    pub standing_angle: f32,
    /// Knee below this while armed counts the rep
    pub bottom_angle: f32,
    /// Knee angle mapped to 0%
    pub percent_zero_angle: f32,
    /// Knee angle mapped to 100%
    pub percent_full_angle: f32,
    pub shallow_percent: f32,
}

impl Default for SquatConfig {
    fn default() -> Self {
        Self {
            standing_angle: 160.0,
            bottom_angle: 100.0,
            percent_zero_angle: 180.0,
            percent_full_angle: 100.0,
            shallow_percent: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LungeConfig {
    /// Body frames ignored before counting starts
    pub warmup_frames: u32,
    /// Knee below this arms the leg
    pub bent_angle: f32,
    /// Knee above this while armed counts the leg
    pub straight_angle: f32,
    pub percent_zero_angle: f32,
    pub percent_full_angle: f32,
    pub shallow_percent: f32,
}

impl Default for LungeConfig {
    fn default() -> Self {
        Self {
            warmup_frames: 30,
            bent_angle: 100.0,
            straight_angle: 150.0,
            percent_zero_angle: 180.0,
            percent_full_angle: 110.0,
            shallow_percent: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlankConfig {
    /// Shoulder-hip-ankle above this accumulates hold time
    pub aligned_angle: f32,
    /// Below this the hips are sagging
    pub sagging_angle: f32,
    pub percent_zero_angle: f32,
    pub percent_full_angle: f32,
}

impl Default for PlankConfig {
    fn default() -> Self {
        Self {
            aligned_angle: 165.0,
            sagging_angle: 150.0,
            percent_zero_angle: 120.0,
            percent_full_angle: 180.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwistConfig {
    /// |shoulder mid - hip mid| above this starts a twist (normalized x)
    pub engage_offset: f32,
    /// ...and below this while twisting completes it
    pub release_offset: f32,
}

impl Default for TwistConfig {
    fn default() -> Self {
        Self {
            engage_offset: 0.15,
            release_offset: 0.05,
        }
    }
}

/// Thresholds for every detector
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Below this a side of the body counts as hidden
    pub min_visibility: f32,
    pub pushup: PushupConfig,
    pub squat: SquatConfig,
    pub lunge: LungeConfig,
    pub plank: PlankConfig,
    pub twist: TwistConfig,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_visibility: 0.5,
            pushup: PushupConfig::default(),
            squat: SquatConfig::default(),
            lunge: LungeConfig::default(),
            plank: PlankConfig::default(),
            twist: TwistConfig::default(),
        }
    }
}

impl DetectionConfig {
    /// Parse and validate a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every threshold pair still forms a working hysteresis band
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_finite = [
            self.min_visibility,
            self.pushup.down_angle,
            self.pushup.up_angle,
            self.pushup.shallow_percent,
            self.pushup.lockout_percent,
            self.squat.standing_angle,
            self.squat.bottom_angle,
            self.squat.percent_zero_angle,
            self.squat.percent_full_angle,
            self.squat.shallow_percent,
            self.lunge.bent_angle,
            self.lunge.straight_angle,
            self.lunge.percent_zero_angle,
            self.lunge.percent_full_angle,
            self.lunge.shallow_percent,
            self.plank.aligned_angle,
            self.plank.sagging_angle,
            self.plank.percent_zero_angle,
            self.plank.percent_full_angle,
            self.twist.engage_offset,
            self.twist.release_offset,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(ConfigError::invalid("config", "thresholds must be finite"));
        }

        if self.pushup.down_angle >= self.pushup.up_angle {
            return Err(ConfigError::invalid("pushup", "down_angle must be below up_angle"));
        }
        if self.squat.bottom_angle >= self.squat.standing_angle {
            return Err(ConfigError::invalid(
                "squat",
                "bottom_angle must be below standing_angle",
            ));
        }
        if self.squat.percent_zero_angle == self.squat.percent_full_angle {
            return Err(ConfigError::invalid("squat", "percent ramp has zero width"));
        }
        if self.lunge.bent_angle >= self.lunge.straight_angle {
            return Err(ConfigError::invalid(
                "lunge",
                "bent_angle must be below straight_angle",
            ));
        }
        if self.lunge.percent_zero_angle == self.lunge.percent_full_angle {
            return Err(ConfigError::invalid("lunge", "percent ramp has zero width"));
        }
        if self.plank.sagging_angle > self.plank.aligned_angle {
            return Err(ConfigError::invalid(
                "plank",
                "sagging_angle must not exceed aligned_angle",
            ));
        }
        if self.plank.percent_zero_angle == self.plank.percent_full_angle {
            return Err(ConfigError::invalid("plank", "percent ramp has zero width"));
        }
        let twist = &self.twist;
        if twist.release_offset < 0.0 || twist.release_offset >= twist.engage_offset {
            return Err(ConfigError::invalid(
                "twist",
                "release_offset must be in [0, engage_offset)",
            ));
        }

        Ok(())
    }
}
