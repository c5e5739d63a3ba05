use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::adapt::types::{AvatarFidelity, DeviceClass};
use crate::error::StoreError;

/// Optional per-user, per-device-class avatar fidelity preference.
/// A stored value supersedes the computed tier; content quality has no
/// such override.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn fetch_device_preference(
        &self,
        user_id: &str,
        device_class: DeviceClass,
    ) -> Result<Option<AvatarFidelity>, StoreError>;
}

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    preferences: RwLock<HashMap<(String, DeviceClass), AvatarFidelity>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(
        &self,
        user_id: impl Into<String>,
        device_class: DeviceClass,
        fidelity: AvatarFidelity,
    ) {
        self.preferences
            .write()
            .await
            .insert((user_id.into(), device_class), fidelity);
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn fetch_device_preference(
        &self,
        user_id: &str,
        device_class: DeviceClass,
    ) -> Result<Option<AvatarFidelity>, StoreError> {
        Ok(self
            .preferences
            .read()
            .await
            .get(&(user_id.to_string(), device_class))
            .copied())
    }
}
