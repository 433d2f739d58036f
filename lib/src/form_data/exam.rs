use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::{non_empty_ids, split_timestamp, student_ids};
use crate::data::{Exam, ExamQuestion, ExamQuestionChoice, ExamSchedule, Id, RecordStatus};
use crate::date::calendar_date;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamUpsertFormData {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covered_lesson_ids: Option<Vec<Id>>,
    #[serde(default)]
    pub questions: Vec<ExamQuestionFormData>,

    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_ids: Option<Vec<Id>>,
}

impl ExamUpsertFormData {
    pub fn from_exam<Tz: TimeZone>(exam: &Exam, tz: &Tz) -> Self {
        let mut form = Self {
            status: exam.status,
            order_number: exam.order_number,
            title: exam.title.clone(),
            randomize_questions: exam.randomize_questions,
            visible_questions_count: exam.visible_questions_count,
            points_per_question: exam.points_per_question,
            passing_points: exam.passing_points,
            description: exam.description.clone(),
            excerpt: exam.excerpt.clone(),
            covered_lesson_ids: Some(exam.covered_lessons.iter().map(|lesson| lesson.id).collect()),
            questions: exam.questions.iter().map(Into::into).collect(),
            ..Self::default()
        };

        match exam.single_schedule() {
            Some(schedule) => {
                let (start_date, start_time) = split_timestamp(schedule.start_date.as_ref(), tz);
                let (end_date, end_time) = split_timestamp(schedule.end_date.as_ref(), tz);

                form.start_date = start_date;
                form.start_time = start_time;
                form.end_date = end_date;
                form.end_time = end_time;
                form.student_ids = Some(student_ids(&schedule.students));
            }
            None => {
                if let Some(schedules) = exam.schedules.as_ref() {
                    tracing::debug!(
                        exam_id = exam.base.id,
                        schedules = schedules.len(),
                        "exam schedule is not editable inline"
                    );
                }
            }
        }

        form
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestionFormData {
    /// Absent for questions added in the editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub choices: Vec<ExamQuestionChoiceFormData>,
}

impl From<&ExamQuestion> for ExamQuestionFormData {
    fn from(question: &ExamQuestion) -> Self {
        Self {
            id: Some(question.base.id),
            order_number: question.order_number,
            text: question.text.clone(),
            choices: question.choices.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamQuestionChoiceFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub is_expression: bool,
    #[serde(default)]
    pub is_correct: bool,
}

impl From<&ExamQuestionChoice> for ExamQuestionChoiceFormData {
    fn from(choice: &ExamQuestionChoice) -> Self {
        Self {
            id: Some(choice.base.id),
            order_number: choice.order_number,
            text: choice.text.clone(),
            is_expression: choice.is_expression,
            is_correct: choice.is_correct,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamScheduleUpsertFormData {
    #[serde(default)]
    pub exam_id: Id,
    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub student_ids: Option<Vec<Id>>,
}

impl ExamScheduleUpsertFormData {
    /// `exam_id` is 0 when the schedule was loaded without its exam.
    pub fn from_schedule<Tz: TimeZone>(schedule: &ExamSchedule, tz: &Tz) -> Self {
        let (start_date, start_time) = split_timestamp(schedule.start_date.as_ref(), tz);
        let (end_date, end_time) = split_timestamp(schedule.end_date.as_ref(), tz);

        Self {
            exam_id: schedule.exam.as_ref().map_or(0, |exam| exam.base.id),
            start_date,
            start_time,
            end_date,
            end_time,
            student_ids: non_empty_ids(student_ids(&schedule.students)),
        }
    }
}
