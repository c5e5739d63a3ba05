use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub enumeration_timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enumeration_timeout_ms: 2000,
        }
    }
}

impl ProbeConfig {
    pub fn enumeration_timeout(&self) -> Duration {
        Duration::from_millis(self.enumeration_timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyThresholds {
    /// Below this min(width, height) a mobile user agent counts as a phone.
    pub mobile_breakpoint: u32,
    pub tablet_max_width: u32,
    pub laptop_max_width: u32,
}

impl Default for ClassifyThresholds {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            tablet_max_width: 1024,
            laptop_max_width: 1440,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub cpu_points_per_core: f64,
    pub cpu_cap: f64,
    pub screen_huge_pixels: f64,
    pub screen_large_pixels: f64,
    pub screen_mid_pixels: f64,
    pub screen_huge_points: f64,
    pub screen_large_points: f64,
    pub screen_mid_points: f64,
    pub screen_base_points: f64,
    pub graphics_points: f64,
    pub connection_4g_points: f64,
    pub connection_3g_points: f64,
    pub connection_2g_points: f64,
    pub connection_neutral_points: f64,
    pub memory_cap: f64,
    pub memory_neutral_points: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cpu_points_per_core: 4.0,
            cpu_cap: 25.0,
            screen_huge_pixels: 4_000_000.0,
            screen_large_pixels: 2_000_000.0,
            screen_mid_pixels: 1_000_000.0,
            screen_huge_points: 20.0,
            screen_large_points: 15.0,
            screen_mid_points: 10.0,
            screen_base_points: 5.0,
            graphics_points: 25.0,
            connection_4g_points: 20.0,
            connection_3g_points: 15.0,
            connection_2g_points: 5.0,
            connection_neutral_points: 10.0,
            memory_cap: 10.0,
            memory_neutral_points: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierThresholds {
    pub avatar_high_score: u8,
    pub avatar_medium_score: u8,
    pub avatar_mobile_text_score: u8,
    pub quality_ultra_score: u8,
    pub quality_high_score: u8,
    pub quality_3g_medium_score: u8,
    /// Scores below this imply low processing power for content adaptation.
    pub low_power_score: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            avatar_high_score: 70,
            avatar_medium_score: 40,
            avatar_mobile_text_score: 30,
            quality_ultra_score: 70,
            quality_high_score: 50,
            quality_3g_medium_score: 60,
            low_power_score: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    pub interest_limit: usize,
    pub popular_limit: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            interest_limit: 3,
            popular_limit: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub preference_override_enabled: bool,
    pub media_enumeration_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            preference_override_enabled: true,
            media_enumeration_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdaptConfig {
    pub probe: ProbeConfig,
    pub classify: ClassifyThresholds,
    pub score: ScoreWeights,
    pub tiers: TierThresholds,
    pub recommend: RecommendConfig,
    pub feature_flags: FeatureFlags,
}

impl AdaptConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ADAPT_PREFERENCE_OVERRIDE_ENABLED") {
            config.feature_flags.preference_override_enabled = val.parse().unwrap_or(true);
        }
        if let Ok(val) = std::env::var("ADAPT_MEDIA_ENUMERATION_ENABLED") {
            config.feature_flags.media_enumeration_enabled = val.parse().unwrap_or(true);
        }
        if let Ok(val) = std::env::var("ADAPT_ENUMERATION_TIMEOUT_MS") {
            if let Ok(ms) = val.parse::<u64>() {
                config.probe.enumeration_timeout_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("ADAPT_LOW_POWER_SCORE") {
            if let Ok(score) = val.parse::<u8>() {
                config.tiers.low_power_score = score;
            }
        }

        config
    }
}
