use serde::Serialize;

use super::{BaseModel, IdRef, RecordStatus, StudentUserAccount};
use crate::date::{parse_timestamp, Timestamp};
use crate::error::Result;
use crate::raw_data::{RawLesson, RawLessonCompletion, RawLessonSchedule};
use crate::relation::{optional_list, Relation};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<LessonSchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completions: Option<Vec<LessonCompletion>>,
}

impl Lesson {
    pub fn from_slice(raw_data: &[u8]) -> Result<Self> {
        let raw: RawLesson = serde_json::from_slice(raw_data)?;

        Ok(raw.into())
    }

    /// A lesson counts as completed as soon as any completion exists.
    pub fn is_completed(&self) -> bool {
        self.completions
            .as_ref()
            .map_or(false, |completions| !completions.is_empty())
    }

    /// The schedule the editors work on, if there is exactly one.
    pub fn single_schedule(&self) -> Option<&LessonSchedule> {
        match self.schedules.as_deref() {
            Some([schedule]) => Some(schedule),
            _ => None,
        }
    }
}

impl From<RawLesson> for Lesson {
    fn from(raw: RawLesson) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            status: raw.status,
            order_number: raw.order_number,
            title: raw.title,
            slug: raw.slug,
            video_url: raw.video_url,
            duration_seconds: raw.duration_seconds,
            description: raw.description,
            excerpt: raw.excerpt,
            schedules: optional_list(raw.schedules, Into::into),
            completions: optional_list(raw.completions, Into::into),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LessonSchedule {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Relation::is_not_requested")]
    pub students: Relation<StudentUserAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<Box<Lesson>>,
}

impl From<RawLessonSchedule> for LessonSchedule {
    fn from(raw: RawLessonSchedule) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            start_date: parse_timestamp(raw.start_date.as_deref()),
            students: Relation::from_raw(raw.students, Into::into),
            lesson: raw.lesson.map(|lesson| Box::new((*lesson).into())),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LessonCompletion {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<IdRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<IdRef>,
}

impl From<RawLessonCompletion> for LessonCompletion {
    fn from(raw: RawLessonCompletion) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            lesson: raw.lesson.map(Into::into),
            student: raw.student.map(Into::into),
        }
    }
}
