use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::adapt::classify::{classify_device, classify_orientation, mobile_user_agent};
use crate::adapt::content::adapt_content;
use crate::adapt::interaction::resolve_interaction_modes;
use crate::adapt::probe::{CapabilityProbe, RawSignals};
use crate::adapt::score::performance_score;
use crate::adapt::tiers::{select_avatar_fidelity, select_content_quality};
use crate::adapt::types::{
    AvatarFidelity, ContentItem, ContentQuality, DeviceCapabilities, DeviceClass,
    InteractionModes, Orientation,
};
use crate::config::AdaptConfig;
use crate::error::AdaptError;
use crate::stores::lesson::LessonStore;
use crate::stores::preference::PreferenceStore;

/// Everything the rendering layer needs about one device, derived in a
/// single pass. Valid until the embedding layer observes a resize or
/// network change and asks for a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub capabilities: DeviceCapabilities,
    pub device_class: DeviceClass,
    pub orientation: Orientation,
    pub performance_score: u8,
    pub avatar_fidelity: AvatarFidelity,
    pub content_quality: ContentQuality,
    pub interaction_modes: InteractionModes,
    pub probed_at: i64,
}

/// Facade over the probe, the pure decision functions and the
/// collaborator stores. The embedding layer owns event subscriptions
/// and decides when to recompute a snapshot; the engine itself keeps no
/// live-updating state beyond its config.
pub struct AdaptEngine {
    config: Arc<RwLock<AdaptConfig>>,
    probe: CapabilityProbe,
    lessons: Arc<dyn LessonStore>,
    preferences: Option<Arc<dyn PreferenceStore>>,
}

impl AdaptEngine {
    pub fn new(
        config: AdaptConfig,
        probe: CapabilityProbe,
        lessons: Arc<dyn LessonStore>,
        preferences: Option<Arc<dyn PreferenceStore>>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            probe,
            lessons,
            preferences,
        }
    }

    pub async fn get_config(&self) -> AdaptConfig {
        self.config.read().await.clone()
    }

    pub async fn reload_config(&self) {
        let new_config = AdaptConfig::from_env();
        {
            let mut config = self.config.write().await;
            *config = new_config;
        }
        info!("adapt config reloaded");
    }

    /// Probe the environment and derive the full device snapshot.
    pub async fn snapshot(&self, signals: &RawSignals) -> DeviceSnapshot {
        let config = self.config.read().await.clone();
        let capabilities = if config.feature_flags.media_enumeration_enabled {
            self.probe.probe(signals).await
        } else {
            self.probe.probe_static(signals)
        };

        let is_mobile_ua = signals
            .user_agent
            .as_deref()
            .map(mobile_user_agent)
            .unwrap_or(false);
        let device_class = classify_device(
            capabilities.screen_width,
            capabilities.screen_height,
            is_mobile_ua,
            &config.classify,
        );
        let orientation =
            classify_orientation(capabilities.screen_width, capabilities.screen_height);
        let score = performance_score(&capabilities, &config.score);
        let avatar_fidelity =
            select_avatar_fidelity(&capabilities, device_class, score, &config.tiers);
        let content_quality =
            select_content_quality(&capabilities, device_class, score, &config.tiers);
        let interaction_modes = resolve_interaction_modes(&capabilities, device_class);

        debug!(
            device_class = device_class.as_str(),
            score,
            avatar_fidelity = avatar_fidelity.as_str(),
            content_quality = content_quality.as_str(),
            "device snapshot computed"
        );

        DeviceSnapshot {
            capabilities,
            device_class,
            orientation,
            performance_score: score,
            avatar_fidelity,
            content_quality,
            interaction_modes,
            probed_at: Utc::now().timestamp_millis(),
        }
    }

    /// Fetch a lesson's content and rewrite it for the snapshot's
    /// device context. The canonical lesson data is never mutated.
    pub async fn adapt_lesson(
        &self,
        lesson_id: &str,
        snapshot: &DeviceSnapshot,
    ) -> Result<Vec<ContentItem>, AdaptError> {
        let config = self.config.read().await;
        let items = self.lessons.fetch_lesson_content(lesson_id).await?;
        Ok(adapt_content(
            &items,
            snapshot.device_class,
            &snapshot.capabilities,
            snapshot.performance_score,
            &config.tiers,
        ))
    }

    /// Avatar fidelity for a user, honoring a stored per-device
    /// preference when one exists. Content quality is never
    /// user-overridable; a store failure degrades to the computed tier.
    pub async fn avatar_fidelity_for(
        &self,
        user_id: Option<&str>,
        snapshot: &DeviceSnapshot,
    ) -> AvatarFidelity {
        let override_enabled = self
            .config
            .read()
            .await
            .feature_flags
            .preference_override_enabled;

        if override_enabled {
            if let (Some(preferences), Some(user_id)) = (&self.preferences, user_id) {
                match preferences
                    .fetch_device_preference(user_id, snapshot.device_class)
                    .await
                {
                    Ok(Some(preferred)) => {
                        debug!(
                            user_id,
                            preferred = preferred.as_str(),
                            "applying stored fidelity preference"
                        );
                        return preferred;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        warn!(user_id, error = %err, "preference lookup failed, using computed tier");
                    }
                }
            }
        }

        snapshot.avatar_fidelity
    }
}
