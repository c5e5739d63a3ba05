pub mod progress;
pub mod recommend;

pub use progress::{course_progress_percent, path_progress_percent};
pub use recommend::recommend_courses;
