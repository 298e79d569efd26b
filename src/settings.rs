//! Difficulty presets and round tuning
//!
//! Settings are read-only inputs: on the web they come from an optional
//! `<script id="game-settings" type="application/json">` block in the page,
//! natively from an optional JSON file. Nothing is written back.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Difficulty levels offered on the select screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Multiplier in percent; kept integral so batch sizes never lose a
    /// particle to float rounding
    pub fn multiplier_percent(&self) -> u32 {
        match self {
            Difficulty::Easy => 70,
            Difficulty::Medium => 100,
            Difficulty::Hard => 130,
        }
    }

    /// Scalar applied to batch size, particle speed and spin
    pub fn multiplier(&self) -> f32 {
        self.multiplier_percent() as f32 / 100.0
    }

    /// Particles per batch: floor(base * multiplier)
    pub fn batch_size(&self, base: u32) -> usize {
        (u64::from(base) * u64::from(self.multiplier_percent()) / 100) as usize
    }
}

/// Round tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds on the clock at round start
    pub round_seconds: u32,
    /// Level increments when the score is an exact multiple of this
    pub level_up_score: u32,
    /// Batch size before the difficulty multiplier
    pub base_batch_size: u32,
    /// Rebuild the whole batch at the new speed on every level-up
    pub refresh_on_level_up: bool,
    /// Countdown ticks a single frame may apply after a long stall
    pub max_clock_catchup: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            level_up_score: LEVEL_UP_SCORE,
            base_batch_size: BASE_BATCH_SIZE,
            refresh_on_level_up: false,
            max_clock_catchup: MAX_CLOCK_CATCHUP,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the round cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.round_seconds == 0 {
            return Err(SettingsError::Invalid {
                field: "round_seconds",
                reason: "must be at least 1",
            });
        }
        if self.level_up_score == 0 {
            return Err(SettingsError::Invalid {
                field: "level_up_score",
                reason: "must be at least 1",
            });
        }
        if self.base_batch_size > MAX_BASE_BATCH_SIZE {
            return Err(SettingsError::Invalid {
                field: "base_batch_size",
                reason: "must be at most 1000",
            });
        }
        // Easy must still spawn at least one particle
        if Difficulty::Easy.batch_size(self.base_batch_size) == 0 {
            return Err(SettingsError::Invalid {
                field: "base_batch_size",
                reason: "must give every difficulty at least one particle",
            });
        }
        if self.max_clock_catchup == 0 {
            return Err(SettingsError::Invalid {
                field: "max_clock_catchup",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Element id of the inline settings block
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "game-settings";

    /// Load settings from the page's inline JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring page settings: {}", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_sizes() {
        assert_eq!(Difficulty::Easy.batch_size(BASE_BATCH_SIZE), 14);
        assert_eq!(Difficulty::Medium.batch_size(BASE_BATCH_SIZE), 20);
        assert_eq!(Difficulty::Hard.batch_size(BASE_BATCH_SIZE), 26);
    }

    #[test]
    fn test_multipliers() {
        assert!((Difficulty::Easy.multiplier() - 0.7).abs() < 1e-6);
        assert!((Difficulty::Medium.multiplier() - 1.0).abs() < 1e-6);
        assert!((Difficulty::Hard.multiplier() - 1.3).abs() < 1e-6);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("nightmare"), None);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "round_seconds": 45 }"#).unwrap();
        assert_eq!(settings.round_seconds, 45);
        assert_eq!(settings.level_up_score, LEVEL_UP_SCORE);
        assert_eq!(settings.base_batch_size, BASE_BATCH_SIZE);
        assert!(!settings.refresh_on_level_up);
    }

    #[test]
    fn test_rejects_zero_round() {
        let err = Settings::from_json(r#"{ "round_seconds": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "round_seconds",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_easy_batch() {
        // floor(1 * 0.7) == 0
        let err = Settings::from_json(r#"{ "base_batch_size": 1 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "base_batch_size",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_oversized_batch() {
        let err = Settings::from_json(r#"{ "base_batch_size": 40000000 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "base_batch_size",
                ..
            }
        ));
        assert!(Settings::from_json(r#"{ "base_batch_size": 1000 }"#).is_ok());
    }

    #[test]
    fn test_batch_size_does_not_overflow() {
        // 4e9 * 130 does not fit in u32
        assert_eq!(
            Difficulty::Hard.batch_size(4_000_000_000),
            5_200_000_000u64 as usize
        );
        assert_eq!(Difficulty::Easy.batch_size(u32::MAX), 3_006_477_106);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Settings::from_json("{ round_seconds: }"),
            Err(SettingsError::Parse(_))
        ));
    }
}
