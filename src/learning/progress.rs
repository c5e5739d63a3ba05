use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-course progress record as the user profile stores it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub completed_lessons: Vec<String>,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOutline {
    pub id: String,
    pub lessons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOutline {
    pub id: String,
    pub modules: Vec<ModuleOutline>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub completed: bool,
}

/// lesson progress keyed by module id, then lesson id
pub type LessonProgressMap = HashMap<String, HashMap<String, LessonProgress>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub status: MilestoneStatus,
}

fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u8
}

/// Completed share of a course's lessons across all modules, as an
/// integer percentage. A course with no lessons counts as 0.
pub fn course_progress_percent(course: &CourseOutline, progress: &LessonProgressMap) -> u8 {
    let mut completed = 0;
    let mut total = 0;

    for module in &course.modules {
        for lesson_id in &module.lessons {
            total += 1;
            let done = progress
                .get(&module.id)
                .and_then(|lessons| lessons.get(lesson_id))
                .map(|p| p.completed)
                .unwrap_or(false);
            if done {
                completed += 1;
            }
        }
    }

    percent(completed, total)
}

/// Completed share of a learning path's milestones, as an integer
/// percentage. An empty path counts as 0.
pub fn path_progress_percent(milestones: &[Milestone]) -> u8 {
    let completed = milestones
        .iter()
        .filter(|m| m.status == MilestoneStatus::Completed)
        .count();
    percent(completed, milestones.len())
}
