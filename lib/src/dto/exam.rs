use chrono::TimeZone;
use serde::Serialize;

use super::normalize_ids;
use crate::data::{Id, RecordStatus};
use crate::date::Timestamp;
use crate::form_data::{
    ExamQuestionChoiceFormData, ExamQuestionFormData, ExamScheduleUpsertFormData,
    ExamUpsertFormData,
};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamUpsertDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomize_questions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_questions_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_per_question: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub covered_lesson_ids: Option<Vec<Id>>,
    pub questions: Vec<ExamQuestionUpsertDto>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub student_ids: Option<Vec<Id>>,
}

impl ExamUpsertDto {
    pub fn from_form_data<Tz: TimeZone>(form: ExamUpsertFormData, tz: &Tz) -> Self {
        Self {
            status: form.status,
            order_number: form.order_number,
            title: form.title,
            randomize_questions: form.randomize_questions,
            visible_questions_count: form.visible_questions_count,
            points_per_question: form.points_per_question,
            passing_points: form.passing_points,
            description: form.description,
            excerpt: form.excerpt,
            covered_lesson_ids: normalize_ids(form.covered_lesson_ids),
            questions: form.questions.into_iter().map(Into::into).collect(),
            start_date: Timestamp::from_local_parts(
                form.start_date,
                form.start_time.as_deref(),
                tz,
            ),
            end_date: Timestamp::from_local_parts(form.end_date, form.end_time.as_deref(), tz),
            student_ids: normalize_ids(form.student_ids),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestionUpsertDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "choicesDto")]
    pub choices: Vec<ExamQuestionChoiceUpsertDto>,
}

impl From<ExamQuestionFormData> for ExamQuestionUpsertDto {
    fn from(form: ExamQuestionFormData) -> Self {
        Self {
            id: form.id,
            order_number: form.order_number,
            text: form.text,
            choices: form.choices.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestionChoiceUpsertDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub is_correct: bool,
}

impl From<ExamQuestionChoiceFormData> for ExamQuestionChoiceUpsertDto {
    fn from(form: ExamQuestionChoiceFormData) -> Self {
        Self {
            id: form.id,
            text: form.text,
            is_correct: form.is_correct,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamScheduleCreateDto {
    pub exam_id: Id,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub student_ids: Option<Vec<Id>>,
}

impl ExamScheduleCreateDto {
    pub fn from_form_data<Tz: TimeZone>(form: ExamScheduleUpsertFormData, tz: &Tz) -> Self {
        Self {
            exam_id: form.exam_id,
            start_date: Timestamp::from_local_parts(
                form.start_date,
                form.start_time.as_deref(),
                tz,
            ),
            end_date: Timestamp::from_local_parts(form.end_date, form.end_time.as_deref(), tz),
            student_ids: normalize_ids(form.student_ids),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamScheduleUpdateDto {
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub student_ids: Option<Vec<Id>>,
}

impl ExamScheduleUpdateDto {
    pub fn from_form_data<Tz: TimeZone>(form: ExamScheduleUpsertFormData, tz: &Tz) -> Self {
        Self {
            start_date: Timestamp::from_local_parts(
                form.start_date,
                form.start_time.as_deref(),
                tz,
            ),
            end_date: Timestamp::from_local_parts(form.end_date, form.end_time.as_deref(), tz),
            student_ids: normalize_ids(form.student_ids),
        }
    }
}
