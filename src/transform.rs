use anyhow::{Context, Result};
use chrono::FixedOffset;
use clap::ValueEnum;
use lms_transform::dto::{
    ExamScheduleCreateDto, ExamScheduleUpdateDto, ExamUpsertDto, LessonScheduleCreateDto,
    LessonScheduleUpdateDto, LessonUpsertDto, StudentUserCreateDto, TeacherUserCreateDto,
};
use lms_transform::form_data::{
    ExamScheduleUpsertFormData, ExamUpsertFormData, LessonScheduleUpsertFormData,
    LessonUpsertFormData, StudentUserFormData, TeacherUserFormData,
};
use lms_transform::raw_data::{RawExamSchedule, RawLessonSchedule};
use lms_transform::{Activity, Exam, ExamSchedule, Lesson, LessonSchedule, User};

use crate::helpers::write_output;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EntityKind {
    Lesson,
    Exam,
    Activity,
    User,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormKind {
    Lesson,
    LessonSchedule,
    Exam,
    ExamSchedule,
    Teacher,
    Student,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DtoKind {
    Lesson,
    LessonScheduleCreate,
    LessonScheduleUpdate,
    Exam,
    ExamScheduleCreate,
    ExamScheduleUpdate,
    Teacher,
    Student,
}

/// Raw API JSON to domain entity JSON.
pub fn entity(kind: EntityKind, raw_data: &[u8]) -> Result<()> {
    match kind {
        EntityKind::Lesson => write_output(&Lesson::from_slice(raw_data)?),
        EntityKind::Exam => write_output(&Exam::from_slice(raw_data)?),
        EntityKind::Activity => write_output(&Activity::from_slice(raw_data)?),
        EntityKind::User => write_output(&User::from_slice(raw_data)?),
    }
}

/// Raw API JSON to the form state an editor starts from.
pub fn form(kind: FormKind, raw_data: &[u8], tz: &FixedOffset) -> Result<()> {
    match kind {
        FormKind::Lesson => {
            let lesson = Lesson::from_slice(raw_data)?;

            write_output(&LessonUpsertFormData::from_lesson(&lesson, tz))
        }
        FormKind::LessonSchedule => {
            let schedule: LessonSchedule =
                serde_json::from_slice::<RawLessonSchedule>(raw_data)?.into();

            write_output(&LessonScheduleUpsertFormData::from_schedule(&schedule, tz))
        }
        FormKind::Exam => {
            let exam = Exam::from_slice(raw_data)?;

            write_output(&ExamUpsertFormData::from_exam(&exam, tz))
        }
        FormKind::ExamSchedule => {
            let schedule: ExamSchedule =
                serde_json::from_slice::<RawExamSchedule>(raw_data)?.into();

            write_output(&ExamScheduleUpsertFormData::from_schedule(&schedule, tz))
        }
        FormKind::Teacher => {
            let user = User::from_slice(raw_data)?;
            let form = TeacherUserFormData::from_user(&user, tz)
                .with_context(|| format!("user {} has no teacher account", user.base.id))?;

            write_output(&form)
        }
        FormKind::Student => {
            let user = User::from_slice(raw_data)?;
            let form = StudentUserFormData::from_user(&user, tz)
                .with_context(|| format!("user {} has no student account", user.base.id))?;

            write_output(&form)
        }
    }
}

/// Submitted form JSON to the create/update payload.
pub fn dto(kind: DtoKind, raw_data: &[u8], tz: &FixedOffset) -> Result<()> {
    match kind {
        DtoKind::Lesson => {
            let form = serde_json::from_slice(raw_data)?;

            write_output(&LessonUpsertDto::from_form_data(form, tz))
        }
        DtoKind::LessonScheduleCreate => {
            let form = serde_json::from_slice(raw_data)?;

            write_output(&LessonScheduleCreateDto::from_form_data(form, tz))
        }
        DtoKind::LessonScheduleUpdate => {
            let form = serde_json::from_slice(raw_data)?;

            write_output(&LessonScheduleUpdateDto::from_form_data(form, tz))
        }
        DtoKind::Exam => {
            let form = serde_json::from_slice(raw_data)?;

            write_output(&ExamUpsertDto::from_form_data(form, tz))
        }
        DtoKind::ExamScheduleCreate => {
            let form = serde_json::from_slice(raw_data)?;

            write_output(&ExamScheduleCreateDto::from_form_data(form, tz))
        }
        DtoKind::ExamScheduleUpdate => {
            let form = serde_json::from_slice(raw_data)?;

            write_output(&ExamScheduleUpdateDto::from_form_data(form, tz))
        }
        DtoKind::Teacher => {
            let form = serde_json::from_slice::<TeacherUserFormData>(raw_data)?;

            write_output(&TeacherUserCreateDto::from(form))
        }
        DtoKind::Student => {
            let form = serde_json::from_slice::<StudentUserFormData>(raw_data)?;

            write_output(&StudentUserCreateDto::from(form))
        }
    }
}
