use crate::models::lesson::{Lesson, LessonError};
use std::fs;
use std::path::Path;

/// Read and parse a TOML lesson file
pub fn read_lesson(path: &Path) -> Result<Lesson, LessonError> {
    let source = fs::read_to_string(path).map_err(|source| LessonError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lesson = Lesson::from_toml_str(&source).map_err(|source| LessonError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Loaded lesson '{}' from {} ({} bullets)",
        lesson.title,
        path.display(),
        lesson.bullets().count()
    );
    Ok(lesson)
}
