use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::adapt::types::ContentItem;
use crate::error::StoreError;

/// Lesson content lookup. The returned sequence is assumed stable and
/// already validated; the adapter performs no schema checks.
#[async_trait]
pub trait LessonStore: Send + Sync {
    async fn fetch_lesson_content(&self, lesson_id: &str) -> Result<Vec<ContentItem>, StoreError>;
}

/// Map-backed store for tests and embedding layers that preload
/// lessons.
#[derive(Default)]
pub struct InMemoryLessonStore {
    lessons: RwLock<HashMap<String, Vec<ContentItem>>>,
}

impl InMemoryLessonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, lesson_id: impl Into<String>, items: Vec<ContentItem>) {
        self.lessons.write().await.insert(lesson_id.into(), items);
    }
}

#[async_trait]
impl LessonStore for InMemoryLessonStore {
    async fn fetch_lesson_content(&self, lesson_id: &str) -> Result<Vec<ContentItem>, StoreError> {
        self.lessons
            .read()
            .await
            .get(lesson_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(lesson_id.to_string()))
    }
}
