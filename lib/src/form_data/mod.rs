//! Editable form shapes derived from domain entities.
//!
//! Composite values are split for the editors: a schedule timestamp turns
//! into a calendar date plus a twelve-hour clock time read in the editing
//! user's zone, and related students turn into their ids.

mod exam;
mod lesson;
mod user;

use chrono::{NaiveDate, TimeZone};

pub use exam::{
    ExamQuestionChoiceFormData, ExamQuestionFormData, ExamScheduleUpsertFormData,
    ExamUpsertFormData,
};
pub use lesson::{LessonScheduleUpsertFormData, LessonUpsertFormData};
pub use user::{StudentUserFormData, TeacherUserFormData};

use crate::data::{Id, StudentUserAccount};
use crate::date::Timestamp;
use crate::relation::Relation;

fn split_timestamp<Tz: TimeZone>(
    timestamp: Option<&Timestamp>,
    tz: &Tz,
) -> (Option<NaiveDate>, Option<String>) {
    timestamp
        .and_then(|timestamp| timestamp.to_local_parts(tz))
        .unzip()
}

fn student_ids(students: &Relation<StudentUserAccount>) -> Vec<Id> {
    students.iter().map(|student| student.id).collect()
}

fn non_empty_ids(ids: Vec<Id>) -> Option<Vec<Id>> {
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}
