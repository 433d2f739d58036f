//! Records exactly as the API sends them.
//!
//! Every relation is optional because the caller decides which relations
//! the API includes. Unknown keys are ignored.

use serde::Deserialize;
use uuid::Uuid;

use crate::data::{
    ActivityCategoryLevel, Id, RecordStatus, UserApprovalStatus, UserGender,
};
use crate::relation::nullable;

#[derive(Deserialize, Clone, Debug)]
pub struct RawIdRef {
    pub id: Id,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawLesson {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub status: Option<RecordStatus>,
    pub order_number: Option<u32>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub video_url: Option<String>,
    pub duration_seconds: Option<u32>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub schedules: Option<Vec<RawLessonSchedule>>,
    pub completions: Option<Vec<RawLessonCompletion>>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawLessonSchedule {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub students: Option<Option<Vec<RawStudentUserAccount>>>,
    pub lesson: Option<Box<RawLesson>>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawLessonCompletion {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub lesson: Option<RawIdRef>,
    pub student: Option<RawIdRef>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawExam {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub status: Option<RecordStatus>,
    pub order_number: Option<u32>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub randomize_questions: Option<bool>,
    pub visible_questions_count: Option<u32>,
    pub points_per_question: Option<u32>,
    pub passing_points: Option<u32>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub covered_lessons: Option<Vec<RawIdRef>>,
    pub questions: Option<Vec<RawExamQuestion>>,
    pub schedules: Option<Vec<RawExamSchedule>>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawExamQuestion {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub order_number: Option<u32>,
    pub text: Option<String>,
    pub choices: Option<Vec<RawExamQuestionChoice>>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawExamQuestionChoice {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub order_number: Option<u32>,
    pub text: Option<String>,
    pub is_expression: Option<bool>,
    pub is_correct: Option<bool>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawExamSchedule {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub students: Option<Option<Vec<RawStudentUserAccount>>>,
    pub exam: Option<Box<RawExam>>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawExamCompletion {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub score: Option<f64>,
    pub exam: Option<RawIdRef>,
    pub student: Option<RawIdRef>,
    pub schedule: Option<RawIdRef>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawActivity {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub status: Option<RecordStatus>,
    pub order_number: Option<u32>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub excerpt: Option<String>,
    pub game: RawActivityGame,
    pub categories: Option<Vec<RawActivityCategory>>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RawActivityGame {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub game_type: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawActivityCategory {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub level: Option<ActivityCategoryLevel>,
    pub randomize_questions: Option<bool>,
    pub visible_questions_count: Option<u32>,
    pub type_point: Option<RawActivityCategoryTypePoint>,
    pub type_time: Option<RawActivityCategoryTypeTime>,
    pub completions: Option<Vec<RawActivityCategoryCompletion>>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawActivityCategoryTypePoint {
    pub duration_seconds: Option<u32>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawActivityCategoryTypeTime {
    pub correct_answer_count: Option<u32>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawActivityCategoryCompletion {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub score: Option<f64>,
    pub time_completed_seconds: Option<u32>,
    pub activity_category: Option<RawIdRef>,
    pub student: Option<RawIdRef>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub id: Id,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    pub supabase_user_id: Option<Uuid>,
    pub public_id: Option<String>,
    pub role: String,
    pub email: Option<String>,
    pub profile_image_url: Option<String>,
    pub approval_status: Option<UserApprovalStatus>,
    pub approval_date: Option<String>,
    /// Decoded only once `role` says which account shape it is.
    pub user_account: Option<serde_json::Value>,
}

/// The owning user as embedded in an account record.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawAccountUser {
    pub email: Option<String>,
    pub public_id: Option<String>,
    pub approval_status: Option<UserApprovalStatus>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawTeacherUserAccount {
    pub id: Id,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub birth_date: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<UserGender>,
    pub about_me: Option<String>,
    pub educational_background: Option<String>,
    pub teaching_experience: Option<String>,
    pub teaching_certifications: Option<String>,
    pub website: Option<String>,
    pub social_media_links: Option<Vec<String>>,
    pub emails: Option<Vec<String>>,
    pub user: Option<RawAccountUser>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawStudentUserAccount {
    pub id: Id,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub birth_date: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<UserGender>,
    pub about_me: Option<String>,
    pub teacher_id: Option<String>,
    pub user: Option<RawAccountUser>,
    pub lesson_schedules: Option<Vec<RawLessonSchedule>>,
    pub exam_schedules: Option<Vec<RawExamSchedule>>,
    pub lesson_completions: Option<Vec<RawLessonCompletion>>,
    pub exam_completions: Option<Vec<RawExamCompletion>>,
    pub activity_category_completions: Option<Vec<RawActivityCategoryCompletion>>,
}
