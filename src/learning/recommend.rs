use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::RecommendConfig;
use crate::learning::progress::CourseProgress;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub enrollments: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Course,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: RecommendationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub link: String,
}

/// Rank courses the user has not started: interest-tag matches first,
/// then the most-enrolled remainder. Deterministic, ties keep catalog
/// order.
pub fn recommend_courses(
    courses: &[CourseSummary],
    progress: &HashMap<String, CourseProgress>,
    interests: &[String],
    config: &RecommendConfig,
) -> Vec<Recommendation> {
    let mut picked: Vec<&CourseSummary> = Vec::new();

    if !interests.is_empty() {
        picked.extend(
            courses
                .iter()
                .filter(|course| {
                    !progress.contains_key(&course.id)
                        && course.tags.iter().any(|tag| interests.contains(tag))
                })
                .take(config.interest_limit),
        );
    }

    let mut popular: Vec<&CourseSummary> = courses
        .iter()
        .filter(|course| {
            !progress.contains_key(&course.id) && !picked.iter().any(|p| p.id == course.id)
        })
        .collect();
    popular.sort_by(|a, b| b.enrollments.cmp(&a.enrollments));
    picked.extend(popular.into_iter().take(config.popular_limit));

    picked
        .into_iter()
        .map(|course| Recommendation {
            id: course.id.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            kind: RecommendationKind::Course,
            duration: course.duration.clone(),
            level: course.level.clone(),
            link: format!("/course/{}", course.id),
        })
        .collect()
}
