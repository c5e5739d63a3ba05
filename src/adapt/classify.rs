use crate::adapt::types::{DeviceClass, Orientation};
use crate::config::ClassifyThresholds;

const MOBILE_UA_MARKERS: &[&str] = &[
    "android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini",
];

/// Whether the user agent identifies a known mobile/tablet platform.
pub fn mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Coarse device class from screen geometry and the user-agent hint.
///
/// A mobile user agent is authoritative for the mobile/tablet boundary;
/// a desktop browser resized narrow is classified by width alone.
pub fn classify_device(
    screen_width: u32,
    screen_height: u32,
    is_mobile_user_agent: bool,
    thresholds: &ClassifyThresholds,
) -> DeviceClass {
    if is_mobile_user_agent {
        if screen_width.min(screen_height) < thresholds.mobile_breakpoint {
            return DeviceClass::Mobile;
        }
        return DeviceClass::Tablet;
    }

    if screen_width < thresholds.tablet_max_width {
        DeviceClass::Tablet
    } else if screen_width < thresholds.laptop_max_width {
        DeviceClass::Laptop
    } else {
        DeviceClass::Desktop
    }
}

pub fn classify_orientation(screen_width: u32, screen_height: u32) -> Orientation {
    if screen_width > screen_height {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}
