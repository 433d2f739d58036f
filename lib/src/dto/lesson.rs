use chrono::TimeZone;
use serde::Serialize;

use super::normalize_ids;
use crate::data::{Id, RecordStatus};
use crate::date::{parse_duration, Timestamp};
use crate::form_data::{LessonScheduleUpsertFormData, LessonUpsertFormData};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonUpsertDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub start_date: Timestamp,
    pub student_ids: Option<Vec<Id>>,
}

impl LessonUpsertDto {
    pub fn from_form_data<Tz: TimeZone>(form: LessonUpsertFormData, tz: &Tz) -> Self {
        Self {
            status: form.status,
            order_number: form.order_number,
            title: form.title,
            video_url: form.video_url,
            duration_seconds: form.duration.as_deref().and_then(parse_duration),
            description: form.description,
            excerpt: form.excerpt,
            start_date: Timestamp::from_local_parts(
                form.start_date,
                form.start_time.as_deref(),
                tz,
            ),
            student_ids: normalize_ids(form.student_ids),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonScheduleCreateDto {
    pub lesson_id: Id,
    pub start_date: Timestamp,
    pub student_ids: Option<Vec<Id>>,
}

impl LessonScheduleCreateDto {
    pub fn from_form_data<Tz: TimeZone>(form: LessonScheduleUpsertFormData, tz: &Tz) -> Self {
        Self {
            lesson_id: form.lesson_id,
            start_date: Timestamp::from_local_parts(
                form.start_date,
                form.start_time.as_deref(),
                tz,
            ),
            student_ids: normalize_ids(form.student_ids),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonScheduleUpdateDto {
    pub start_date: Timestamp,
    pub student_ids: Option<Vec<Id>>,
}

impl LessonScheduleUpdateDto {
    pub fn from_form_data<Tz: TimeZone>(form: LessonScheduleUpsertFormData, tz: &Tz) -> Self {
        Self {
            start_date: Timestamp::from_local_parts(
                form.start_date,
                form.start_time.as_deref(),
                tz,
            ),
            student_ids: normalize_ids(form.student_ids),
        }
    }
}
