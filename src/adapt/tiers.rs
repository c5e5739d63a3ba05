use crate::adapt::types::{
    AvatarFidelity, ContentQuality, DeviceCapabilities, DeviceClass, EffectiveType,
};
use crate::config::TierThresholds;

/// Avatar fidelity from capabilities, device class and performance
/// score. Ordered rules, first match wins; missing graphics
/// acceleration is a hard floor no score can climb over.
pub fn select_avatar_fidelity(
    capabilities: &DeviceCapabilities,
    device_class: DeviceClass,
    score: u8,
    thresholds: &TierThresholds,
) -> AvatarFidelity {
    if !capabilities.has_graphics_acceleration {
        return AvatarFidelity::Text;
    }

    if device_class == DeviceClass::Desktop && score > thresholds.avatar_high_score {
        return AvatarFidelity::High;
    }

    if matches!(device_class, DeviceClass::Desktop | DeviceClass::Laptop)
        && score > thresholds.avatar_medium_score
    {
        return AvatarFidelity::Medium;
    }

    if device_class == DeviceClass::Mobile && score < thresholds.avatar_mobile_text_score {
        return AvatarFidelity::Text;
    }

    AvatarFidelity::Low
}

/// Content quality from connection conditions, device class and
/// performance score. Save-data mode overrides everything else; with no
/// connection information the device class alone decides.
pub fn select_content_quality(
    capabilities: &DeviceCapabilities,
    device_class: DeviceClass,
    score: u8,
    thresholds: &TierThresholds,
) -> ContentQuality {
    if let Some(connection) = &capabilities.connection {
        if connection.save_data {
            return ContentQuality::Minimal;
        }

        return match connection.effective_type {
            EffectiveType::FourG => {
                if device_class == DeviceClass::Desktop && score > thresholds.quality_ultra_score {
                    ContentQuality::Ultra
                } else if score > thresholds.quality_high_score {
                    ContentQuality::High
                } else {
                    ContentQuality::Medium
                }
            }
            EffectiveType::ThreeG => {
                if score > thresholds.quality_3g_medium_score {
                    ContentQuality::Medium
                } else {
                    ContentQuality::Low
                }
            }
            EffectiveType::TwoG | EffectiveType::Slow2g => ContentQuality::Minimal,
            EffectiveType::Unknown => ContentQuality::Medium,
        };
    }

    match device_class {
        DeviceClass::Desktop => ContentQuality::High,
        DeviceClass::Laptop | DeviceClass::Tablet => ContentQuality::Medium,
        DeviceClass::Mobile => ContentQuality::Low,
    }
}
