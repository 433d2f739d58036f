//! Create and update payloads built from submitted form shapes.

mod exam;
mod lesson;
mod user;

pub use exam::{
    ExamQuestionChoiceUpsertDto, ExamQuestionUpsertDto, ExamScheduleCreateDto,
    ExamScheduleUpdateDto, ExamUpsertDto,
};
pub use lesson::{LessonScheduleCreateDto, LessonScheduleUpdateDto, LessonUpsertDto};
pub use user::{StudentUserCreateDto, TeacherUserCreateDto};

use crate::data::Id;

/// The API reads `null` as "remove every association", so an empty or
/// missing id list is sent as `null` and never as `[]`.
pub fn normalize_ids(ids: Option<Vec<Id>>) -> Option<Vec<Id>> {
    ids.filter(|ids| !ids.is_empty())
}

pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
