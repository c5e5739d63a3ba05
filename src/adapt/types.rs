use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Laptop,
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Laptop => "laptop",
            Self::Desktop => "desktop",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mobile" => Self::Mobile,
            "tablet" => Self::Tablet,
            "laptop" => Self::Laptop,
            _ => Self::Desktop,
        }
    }

    pub fn is_handheld(&self) -> bool {
        matches!(self, Self::Mobile | Self::Tablet)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

/// Avatar rendering fidelity, richest to cheapest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AvatarFidelity {
    #[serde(rename = "3d_full")]
    High,
    #[serde(rename = "2.5d")]
    Medium,
    #[default]
    #[serde(rename = "2d")]
    Low,
    #[serde(rename = "text_only")]
    Text,
}

impl AvatarFidelity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "3d_full",
            Self::Medium => "2.5d",
            Self::Low => "2d",
            Self::Text => "text_only",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "3d_full" => Self::High,
            "2.5d" => Self::Medium,
            "text_only" => Self::Text,
            _ => Self::Low,
        }
    }
}

/// Media asset quality, richest to cheapest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentQuality {
    Ultra,
    High,
    #[default]
    Medium,
    Low,
    Minimal,
}

impl ContentQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ultra => "ultra",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Minimal => "minimal",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ultra" => Self::Ultra,
            "high" => Self::High,
            "low" => Self::Low,
            "minimal" => Self::Minimal,
            _ => Self::Medium,
        }
    }

    /// Tiers that imply a constrained connection for media delivery.
    pub fn is_low_bandwidth(&self) -> bool {
        matches!(self, Self::Low | Self::Minimal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EffectiveType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl EffectiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow2g => "slow-2g",
            Self::TwoG => "2g",
            Self::ThreeG => "3g",
            Self::FourG => "4g",
            Self::Unknown => "unknown",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "slow-2g" => Self::Slow2g,
            "2g" => Self::TwoG,
            "3g" => Self::ThreeG,
            "4g" => Self::FourG,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub effective_type: EffectiveType,
    pub downlink: f64,
    pub rtt: f64,
    pub save_data: bool,
}

/// One-shot capability snapshot. Every field resolves to a defined
/// default when the underlying signal is unavailable, so downstream
/// scoring never sees a hole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapabilities {
    pub screen_width: u32,
    pub screen_height: u32,
    pub pixel_ratio: f64,
    pub touch_support: bool,
    pub has_graphics_acceleration: bool,
    pub cpu_cores: u32,
    pub has_realtime_communication: bool,
    pub has_microphone: bool,
    pub has_camera: bool,
    pub has_orientation_sensor: bool,
    pub has_spatial_support: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_gb: Option<f64>,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            screen_width: 1024,
            screen_height: 768,
            pixel_ratio: 1.0,
            touch_support: false,
            has_graphics_acceleration: false,
            cpu_cores: 2,
            has_realtime_communication: false,
            has_microphone: false,
            has_camera: false,
            has_orientation_sensor: false,
            has_spatial_support: false,
            connection: None,
            memory_gb: None,
        }
    }
}

impl DeviceCapabilities {
    pub fn effective_pixel_count(&self) -> f64 {
        self.screen_width as f64 * self.screen_height as f64 * self.pixel_ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "simulation")]
    Simulation,
    #[serde(rename = "complex-simulation")]
    ComplexSimulation,
    #[serde(rename = "3d-model")]
    ThreeDModel,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "quiz")]
    Quiz,
    #[serde(rename = "ar")]
    Ar,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "high-res-image")]
    HighResImage,
    #[serde(rename = "simplified-image")]
    SimplifiedImage,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Simulation => "simulation",
            Self::ComplexSimulation => "complex-simulation",
            Self::ThreeDModel => "3d-model",
            Self::Text => "text",
            Self::Audio => "audio",
            Self::Quiz => "quiz",
            Self::Ar => "ar",
            Self::Image => "image",
            Self::HighResImage => "high-res-image",
            Self::SimplifiedImage => "simplified-image",
        }
    }

    /// Types rule 1 simplifies away on constrained devices.
    pub fn is_heavy_interactive(&self) -> bool {
        matches!(self, Self::ThreeDModel | Self::ComplexSimulation)
    }

    /// Types rule 3 compresses on a low bandwidth tier.
    pub fn is_bandwidth_sensitive(&self) -> bool {
        matches!(self, Self::Video | Self::HighResImage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSize {
    Full,
    Compressed,
}

/// One playable unit inside a lesson. The adapter only ever rewrites a
/// derived copy; the canonical lesson data stays untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ContentType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_content: Option<String>,
    #[serde(default)]
    pub requires_graphics_acceleration: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<ContentQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ContentSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captions: Option<String>,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, item_type: ContentType, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_type,
            content: content.into(),
            fallback_content: None,
            requires_graphics_acceleration: false,
            quality: None,
            size: None,
            captions: None,
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback_content = Some(fallback.into());
        self
    }

    pub fn requiring_graphics(mut self) -> Self {
        self.requires_graphics_acceleration = true;
        self
    }
}

/// Input modalities the rendering layer may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InteractionModes {
    pub touch: bool,
    pub keyboard: bool,
    pub mouse: bool,
    pub stylus: bool,
    pub voice: bool,
    pub gesture: bool,
    #[serde(rename = "ar")]
    pub spatial: bool,
    pub motion: bool,
}
