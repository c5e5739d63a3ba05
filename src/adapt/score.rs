use crate::adapt::types::{DeviceCapabilities, EffectiveType};
use crate::config::ScoreWeights;

/// Bounded performance score in [0, 100] from independently capped
/// weighted contributions. Pure and total: any capability snapshot maps
/// to a score, missing optional signals contribute their neutral value.
pub fn performance_score(capabilities: &DeviceCapabilities, weights: &ScoreWeights) -> u8 {
    let mut score = 0.0;

    score += (capabilities.cpu_cores as f64 * weights.cpu_points_per_core).min(weights.cpu_cap);

    let pixel_count = capabilities.effective_pixel_count();
    score += if pixel_count > weights.screen_huge_pixels {
        weights.screen_huge_points
    } else if pixel_count > weights.screen_large_pixels {
        weights.screen_large_points
    } else if pixel_count > weights.screen_mid_pixels {
        weights.screen_mid_points
    } else {
        weights.screen_base_points
    };

    if capabilities.has_graphics_acceleration {
        score += weights.graphics_points;
    }

    match &capabilities.connection {
        Some(connection) => {
            score += match connection.effective_type {
                EffectiveType::FourG => weights.connection_4g_points,
                EffectiveType::ThreeG => weights.connection_3g_points,
                EffectiveType::TwoG | EffectiveType::Slow2g => weights.connection_2g_points,
                EffectiveType::Unknown => 0.0,
            };
        }
        None => score += weights.connection_neutral_points,
    }

    match capabilities.memory_gb {
        Some(memory) => score += memory.min(weights.memory_cap).max(0.0),
        None => score += weights.memory_neutral_points,
    }

    score.clamp(0.0, 100.0).round() as u8
}
