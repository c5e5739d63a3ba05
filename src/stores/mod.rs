pub mod lesson;
pub mod preference;

pub use lesson::{InMemoryLessonStore, LessonStore};
pub use preference::{InMemoryPreferenceStore, PreferenceStore};
