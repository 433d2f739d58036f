use serde::Serialize;

use super::{BaseModel, IdRef, RecordStatus, StudentUserAccount};
use crate::date::{parse_timestamp, Timestamp};
use crate::error::Result;
use crate::raw_data::{
    RawExam, RawExamCompletion, RawExamQuestion, RawExamQuestionChoice, RawExamSchedule,
};
use crate::relation::{optional_list, Relation};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
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
    pub covered_lessons: Vec<IdRef>,
    pub questions: Vec<ExamQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<ExamSchedule>>,
}

impl Exam {
    pub fn from_slice(raw_data: &[u8]) -> Result<Self> {
        let raw: RawExam = serde_json::from_slice(raw_data)?;

        Ok(raw.into())
    }

    pub fn single_schedule(&self) -> Option<&ExamSchedule> {
        match self.schedules.as_deref() {
            Some([schedule]) => Some(schedule),
            _ => None,
        }
    }
}

impl From<RawExam> for Exam {
    fn from(raw: RawExam) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            status: raw.status,
            order_number: raw.order_number,
            title: raw.title,
            slug: raw.slug,
            randomize_questions: raw.randomize_questions,
            visible_questions_count: raw.visible_questions_count,
            points_per_question: raw.points_per_question,
            passing_points: raw.passing_points,
            description: raw.description,
            excerpt: raw.excerpt,
            covered_lessons: raw
                .covered_lessons
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            questions: raw
                .questions
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            schedules: optional_list(raw.schedules, Into::into),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestion {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub choices: Vec<ExamQuestionChoice>,
}

impl From<RawExamQuestion> for ExamQuestion {
    fn from(raw: RawExamQuestion) -> Self {
        let choices = raw
            .choices
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            order_number: raw.order_number,
            text: raw.text,
            choices,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestionChoice {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub is_expression: bool,
    pub is_correct: bool,
}

impl From<RawExamQuestionChoice> for ExamQuestionChoice {
    fn from(raw: RawExamQuestionChoice) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            order_number: raw.order_number,
            text: raw.text,
            is_expression: raw.is_expression.unwrap_or(false),
            is_correct: raw.is_correct.unwrap_or(false),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamSchedule {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Relation::is_not_requested")]
    pub students: Relation<StudentUserAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam: Option<Box<Exam>>,
}

impl From<RawExamSchedule> for ExamSchedule {
    fn from(raw: RawExamSchedule) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            start_date: parse_timestamp(raw.start_date.as_deref()),
            end_date: parse_timestamp(raw.end_date.as_deref()),
            students: Relation::from_raw(raw.students, Into::into),
            exam: raw.exam.map(|exam| Box::new((*exam).into())),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ExamCompletion {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam: Option<IdRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<IdRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<IdRef>,
}

impl From<RawExamCompletion> for ExamCompletion {
    fn from(raw: RawExamCompletion) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            score: raw.score,
            exam: raw.exam.map(Into::into),
            student: raw.student.map(Into::into),
            schedule: raw.schedule.map(Into::into),
        }
    }
}
