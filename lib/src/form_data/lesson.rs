use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::{non_empty_ids, split_timestamp, student_ids};
use crate::data::{Id, Lesson, LessonSchedule, RecordStatus};
use crate::date::{calendar_date, format_duration};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonUpsertFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// `HH:MM:SS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_ids: Option<Vec<Id>>,
}

impl LessonUpsertFormData {
    /// Schedule fields are only filled for a lesson with exactly one
    /// schedule, the single case the lesson editor can change.
    pub fn from_lesson<Tz: TimeZone>(lesson: &Lesson, tz: &Tz) -> Self {
        let mut form = Self {
            status: lesson.status,
            order_number: lesson.order_number,
            title: lesson.title.clone(),
            video_url: lesson.video_url.clone(),
            duration: lesson.duration_seconds.map(format_duration),
            description: lesson
                .description
                .clone()
                .filter(|description| !description.is_empty()),
            excerpt: lesson.excerpt.clone(),
            ..Self::default()
        };

        match lesson.single_schedule() {
            Some(schedule) => {
                let (start_date, start_time) = split_timestamp(schedule.start_date.as_ref(), tz);

                form.start_date = start_date;
                form.start_time = start_time;
                form.student_ids = Some(student_ids(&schedule.students));
            }
            None => {
                if let Some(schedules) = lesson.schedules.as_ref() {
                    tracing::debug!(
                        lesson_id = lesson.base.id,
                        schedules = schedules.len(),
                        "lesson schedule is not editable inline"
                    );
                }
            }
        }

        form
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonScheduleUpsertFormData {
    #[serde(default)]
    pub lesson_id: Id,
    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    pub student_ids: Option<Vec<Id>>,
}

impl LessonScheduleUpsertFormData {
    /// `lesson_id` is 0 when the schedule was loaded without its lesson.
    pub fn from_schedule<Tz: TimeZone>(schedule: &LessonSchedule, tz: &Tz) -> Self {
        let (start_date, start_time) = split_timestamp(schedule.start_date.as_ref(), tz);

        Self {
            lesson_id: schedule.lesson.as_ref().map_or(0, |lesson| lesson.base.id),
            start_date,
            start_time,
            student_ids: non_empty_ids(student_ids(&schedule.students)),
        }
    }
}
