use tracing::{debug, warn};

use crate::adapt::tiers::select_content_quality;
use crate::adapt::types::{
    ContentItem, ContentQuality, ContentSize, ContentType, DeviceCapabilities, DeviceClass,
};
use crate::config::TierThresholds;

/// Rewrite a lesson's content sequence for the given device context.
/// Returns a derived copy; the input is never mutated. Rules apply per
/// item in fixed order: simplify heavy interactive types on constrained
/// devices, substitute video for graphics-gated items, then compress
/// bandwidth-sensitive media on a low quality tier. An item with no
/// matching rule passes through unchanged, which makes the transform
/// idempotent for a fixed device context.
pub fn adapt_content(
    items: &[ContentItem],
    device_class: DeviceClass,
    capabilities: &DeviceCapabilities,
    score: u8,
    thresholds: &TierThresholds,
) -> Vec<ContentItem> {
    let quality = select_content_quality(capabilities, device_class, score, thresholds);
    let low_bandwidth = quality.is_low_bandwidth();
    let low_power = score < thresholds.low_power_score;
    let simplify = device_class == DeviceClass::Mobile || low_power;

    items
        .iter()
        .map(|item| adapt_item(item, capabilities, simplify, low_bandwidth))
        .collect()
}

fn adapt_item(
    item: &ContentItem,
    capabilities: &DeviceCapabilities,
    simplify: bool,
    low_bandwidth: bool,
) -> ContentItem {
    let mut adapted = item.clone();

    // Rules 1 and 2 test the original item, so a simplified item still
    // gets the video substitute when graphics acceleration is missing.
    if simplify && item.item_type.is_heavy_interactive() {
        match &item.fallback_content {
            Some(fallback) => {
                adapted.item_type = ContentType::SimplifiedImage;
                adapted.content = fallback.clone();
                debug!(item = %item.id, "simplified heavy interactive content");
            }
            None => {
                warn!(item = %item.id, "no fallback content, skipping simplification");
            }
        }
    }

    if item.requires_graphics_acceleration && !capabilities.has_graphics_acceleration {
        match &item.fallback_content {
            Some(fallback) => {
                adapted.item_type = ContentType::Video;
                adapted.content = fallback.clone();
                debug!(item = %item.id, "substituted video for graphics-gated content");
            }
            None => {
                warn!(item = %item.id, "no fallback content, skipping video substitution");
            }
        }
    }

    // Rule 3 tests the evolving copy: a substitute video still gets
    // compressed, a simplified image never does.
    if low_bandwidth && adapted.item_type.is_bandwidth_sensitive() {
        adapted.quality = Some(ContentQuality::Low);
        adapted.size = Some(ContentSize::Compressed);
    }

    adapted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapt::types::{ConnectionInfo, EffectiveType};

    fn thresholds() -> TierThresholds {
        TierThresholds::default()
    }

    fn caps_with_graphics() -> DeviceCapabilities {
        DeviceCapabilities {
            has_graphics_acceleration: true,
            ..Default::default()
        }
    }

    fn low_bandwidth_caps() -> DeviceCapabilities {
        DeviceCapabilities {
            has_graphics_acceleration: true,
            connection: Some(ConnectionInfo {
                effective_type: EffectiveType::ThreeG,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn mobile_simplifies_heavy_interactive_items() {
        let items = vec![
            ContentItem::new("m1", ContentType::ThreeDModel, "model.glb")
                .with_fallback("model.png"),
            ContentItem::new("m2", ContentType::Text, "intro.md"),
        ];
        let adapted = adapt_content(
            &items,
            DeviceClass::Mobile,
            &caps_with_graphics(),
            80,
            &thresholds(),
        );

        assert_eq!(adapted[0].item_type, ContentType::SimplifiedImage);
        assert_eq!(adapted[0].content, "model.png");
        assert_eq!(adapted[1], items[1]);
    }

    #[test]
    fn low_power_desktop_simplifies_too() {
        let items = vec![ContentItem::new(
            "sim",
            ContentType::ComplexSimulation,
            "sim.json",
        )
        .with_fallback("sim.png")];
        let adapted = adapt_content(
            &items,
            DeviceClass::Desktop,
            &caps_with_graphics(),
            20,
            &thresholds(),
        );

        assert_eq!(adapted[0].item_type, ContentType::SimplifiedImage);
    }

    #[test]
    fn graphics_gated_item_becomes_video_without_acceleration() {
        let items = vec![ContentItem::new("ar", ContentType::Ar, "scene.usdz")
            .with_fallback("scene-tour.mp4")
            .requiring_graphics()];
        let adapted = adapt_content(
            &items,
            DeviceClass::Desktop,
            &DeviceCapabilities::default(),
            80,
            &thresholds(),
        );

        assert_eq!(adapted[0].item_type, ContentType::Video);
        assert_eq!(adapted[0].content, "scene-tour.mp4");
    }

    #[test]
    fn video_substitution_applies_after_simplification() {
        // Rule 2 keys off the original item's flag even when rule 1
        // already rewrote the type.
        let items = vec![ContentItem::new("m", ContentType::ThreeDModel, "model.glb")
            .with_fallback("fallback.mp4")
            .requiring_graphics()];
        let adapted = adapt_content(
            &items,
            DeviceClass::Mobile,
            &DeviceCapabilities::default(),
            80,
            &thresholds(),
        );

        assert_eq!(adapted[0].item_type, ContentType::Video);
        assert_eq!(adapted[0].content, "fallback.mp4");
    }

    #[test]
    fn low_bandwidth_compresses_video_and_high_res_images() {
        let items = vec![
            ContentItem::new("v", ContentType::Video, "lecture.mp4"),
            ContentItem::new("i", ContentType::HighResImage, "diagram.png"),
            ContentItem::new("t", ContentType::Text, "notes.md"),
        ];
        let adapted = adapt_content(
            &items,
            DeviceClass::Desktop,
            &low_bandwidth_caps(),
            40,
            &thresholds(),
        );

        assert_eq!(adapted[0].quality, Some(ContentQuality::Low));
        assert_eq!(adapted[0].size, Some(ContentSize::Compressed));
        assert_eq!(adapted[1].quality, Some(ContentQuality::Low));
        assert_eq!(adapted[2].quality, None);
    }

    #[test]
    fn substitute_video_gets_compressed_on_low_bandwidth() {
        let items = vec![ContentItem::new("g", ContentType::Simulation, "sim.json")
            .with_fallback("sim.mp4")
            .requiring_graphics()];
        let mut caps = low_bandwidth_caps();
        caps.has_graphics_acceleration = false;
        let adapted = adapt_content(&items, DeviceClass::Desktop, &caps, 40, &thresholds());

        assert_eq!(adapted[0].item_type, ContentType::Video);
        assert_eq!(adapted[0].size, Some(ContentSize::Compressed));
    }

    #[test]
    fn missing_fallback_passes_item_through() {
        let items = vec![ContentItem::new("m", ContentType::ThreeDModel, "model.glb")];
        let adapted = adapt_content(
            &items,
            DeviceClass::Mobile,
            &caps_with_graphics(),
            80,
            &thresholds(),
        );

        assert_eq!(adapted[0], items[0]);
    }

    #[test]
    fn input_sequence_is_untouched() {
        let items = vec![ContentItem::new("m", ContentType::ThreeDModel, "model.glb")
            .with_fallback("model.png")];
        let before = items.clone();
        let _ = adapt_content(
            &items,
            DeviceClass::Mobile,
            &caps_with_graphics(),
            80,
            &thresholds(),
        );

        assert_eq!(items, before);
    }

    #[test]
    fn adaptation_is_idempotent() {
        let items = vec![
            ContentItem::new("m", ContentType::ThreeDModel, "model.glb")
                .with_fallback("model.png"),
            ContentItem::new("v", ContentType::Video, "lecture.mp4"),
            ContentItem::new("g", ContentType::Simulation, "sim.json")
                .with_fallback("sim.mp4")
                .requiring_graphics(),
        ];
        let caps = DeviceCapabilities {
            connection: Some(ConnectionInfo {
                effective_type: EffectiveType::ThreeG,
                ..Default::default()
            }),
            ..Default::default()
        };

        let once = adapt_content(&items, DeviceClass::Mobile, &caps, 20, &thresholds());
        let twice = adapt_content(&once, DeviceClass::Mobile, &caps, 20, &thresholds());

        assert_eq!(once, twice);
    }
}
