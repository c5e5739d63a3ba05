use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::warn;

use crate::adapt::types::{ConnectionInfo, DeviceCapabilities};
use crate::config::ProbeConfig;
use crate::error::ProbeError;

const DEFAULT_CPU_CORES: u32 = 2;
const DEFAULT_PIXEL_RATIO: f64 = 1.0;

/// Raw environment signals as the embedding layer observed them.
/// Optional fields model signals the platform may not expose at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignals {
    pub screen_width: u32,
    pub screen_height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_ratio: Option<f64>,
    pub touch_support: bool,
    pub has_graphics_acceleration: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cores: Option<u32>,
    pub has_realtime_communication: bool,
    pub has_orientation_sensor: bool,
    pub has_spatial_support: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<ConnectionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for RawSignals {
    fn default() -> Self {
        Self {
            screen_width: 1024,
            screen_height: 768,
            pixel_ratio: None,
            touch_support: false,
            has_graphics_acceleration: false,
            cpu_cores: None,
            has_realtime_communication: false,
            has_orientation_sensor: false,
            has_spatial_support: false,
            connection: None,
            memory_gb: None,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDeviceKind {
    AudioInput,
    VideoInput,
    AudioOutput,
}

/// Media device enumeration as the platform exposes it. Implementations
/// may hang or reject; the probe bounds and absorbs both.
#[async_trait]
pub trait DeviceEnumerator: Send + Sync {
    async fn enumerate(&self) -> Result<Vec<MediaDeviceKind>, ProbeError>;
}

/// Gathers a capability snapshot from raw signals. Never fails: any
/// unavailable signal resolves to its documented default, and the joint
/// microphone/camera enumeration resolves to `false` on timeout,
/// rejection or when no enumerator is available.
pub struct CapabilityProbe {
    config: ProbeConfig,
    enumerator: Option<Arc<dyn DeviceEnumerator>>,
}

impl CapabilityProbe {
    pub fn new(config: ProbeConfig, enumerator: Option<Arc<dyn DeviceEnumerator>>) -> Self {
        Self { config, enumerator }
    }

    pub async fn probe(&self, signals: &RawSignals) -> DeviceCapabilities {
        let (has_microphone, has_camera) = self.enumerate_media().await;
        Self::from_signals(signals, has_microphone, has_camera)
    }

    /// Snapshot from the raw signals alone, leaving media enumeration
    /// untouched. Both peripheral flags resolve to `false`.
    pub fn probe_static(&self, signals: &RawSignals) -> DeviceCapabilities {
        Self::from_signals(signals, false, false)
    }

    fn from_signals(
        signals: &RawSignals,
        has_microphone: bool,
        has_camera: bool,
    ) -> DeviceCapabilities {
        DeviceCapabilities {
            screen_width: signals.screen_width,
            screen_height: signals.screen_height,
            pixel_ratio: signals
                .pixel_ratio
                .filter(|ratio| *ratio > 0.0)
                .unwrap_or(DEFAULT_PIXEL_RATIO),
            touch_support: signals.touch_support,
            has_graphics_acceleration: signals.has_graphics_acceleration,
            cpu_cores: signals
                .cpu_cores
                .filter(|cores| *cores > 0)
                .unwrap_or(DEFAULT_CPU_CORES),
            has_realtime_communication: signals.has_realtime_communication,
            has_microphone,
            has_camera,
            has_orientation_sensor: signals.has_orientation_sensor,
            has_spatial_support: signals.has_spatial_support,
            connection: signals.connection.clone(),
            memory_gb: signals.memory_gb.filter(|memory| *memory > 0.0),
        }
    }

    async fn enumerate_media(&self) -> (bool, bool) {
        let Some(enumerator) = &self.enumerator else {
            return (false, false);
        };

        match timeout(self.config.enumeration_timeout(), enumerator.enumerate()).await {
            Ok(Ok(devices)) => (
                devices.contains(&MediaDeviceKind::AudioInput),
                devices.contains(&MediaDeviceKind::VideoInput),
            ),
            Ok(Err(err)) => {
                warn!(error = %err, "device enumeration failed");
                (false, false)
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.config.enumeration_timeout_ms,
                    "device enumeration timed out"
                );
                (false, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct FixedEnumerator(Vec<MediaDeviceKind>);

    #[async_trait]
    impl DeviceEnumerator for FixedEnumerator {
        async fn enumerate(&self) -> Result<Vec<MediaDeviceKind>, ProbeError> {
            Ok(self.0.clone())
        }
    }

    struct RejectingEnumerator;

    #[async_trait]
    impl DeviceEnumerator for RejectingEnumerator {
        async fn enumerate(&self) -> Result<Vec<MediaDeviceKind>, ProbeError> {
            Err(ProbeError::Enumeration("permission denied".into()))
        }
    }

    struct HangingEnumerator;

    #[async_trait]
    impl DeviceEnumerator for HangingEnumerator {
        async fn enumerate(&self) -> Result<Vec<MediaDeviceKind>, ProbeError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn missing_signals_take_documented_defaults() {
        let probe = CapabilityProbe::new(ProbeConfig::default(), None);
        let caps = probe.probe(&RawSignals::default()).await;

        assert_eq!(caps.cpu_cores, 2);
        assert_eq!(caps.pixel_ratio, 1.0);
        assert!(!caps.has_microphone);
        assert!(!caps.has_camera);
        assert!(caps.connection.is_none());
        assert!(caps.memory_gb.is_none());
    }

    #[tokio::test]
    async fn invalid_hints_are_replaced() {
        let probe = CapabilityProbe::new(ProbeConfig::default(), None);
        let signals = RawSignals {
            pixel_ratio: Some(0.0),
            cpu_cores: Some(0),
            memory_gb: Some(-4.0),
            ..Default::default()
        };
        let caps = probe.probe(&signals).await;

        assert_eq!(caps.pixel_ratio, 1.0);
        assert_eq!(caps.cpu_cores, 2);
        assert!(caps.memory_gb.is_none());
    }

    #[tokio::test]
    async fn enumeration_resolves_peripheral_flags() {
        let enumerator = Arc::new(FixedEnumerator(vec![
            MediaDeviceKind::AudioInput,
            MediaDeviceKind::AudioOutput,
        ]));
        let probe = CapabilityProbe::new(ProbeConfig::default(), Some(enumerator));
        let caps = probe.probe(&RawSignals::default()).await;

        assert!(caps.has_microphone);
        assert!(!caps.has_camera);
    }

    #[tokio::test]
    async fn rejection_resolves_to_false() {
        let probe = CapabilityProbe::new(ProbeConfig::default(), Some(Arc::new(RejectingEnumerator)));
        let caps = probe.probe(&RawSignals::default()).await;

        assert!(!caps.has_microphone);
        assert!(!caps.has_camera);
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_enumeration_is_bounded() {
        let probe = CapabilityProbe::new(ProbeConfig::default(), Some(Arc::new(HangingEnumerator)));
        let caps = probe.probe(&RawSignals::default()).await;

        assert!(!caps.has_microphone);
        assert!(!caps.has_camera);
    }
}
