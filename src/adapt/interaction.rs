use crate::adapt::types::{DeviceCapabilities, DeviceClass, InteractionModes};

/// Input modalities available to the rendering layer. Pure and total;
/// spatial interaction additionally needs a camera for tracking.
pub fn resolve_interaction_modes(
    capabilities: &DeviceCapabilities,
    device_class: DeviceClass,
) -> InteractionModes {
    InteractionModes {
        touch: capabilities.touch_support,
        keyboard: !device_class.is_handheld(),
        mouse: !device_class.is_handheld(),
        stylus: device_class == DeviceClass::Tablet,
        voice: capabilities.has_microphone,
        gesture: capabilities.has_camera,
        spatial: capabilities.has_spatial_support && capabilities.has_camera,
        motion: capabilities.has_orientation_sensor,
    }
}
