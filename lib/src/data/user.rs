use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    ActivityCategoryCompletion, BaseModel, ExamCompletion, ExamSchedule, Id, LessonCompletion,
    LessonSchedule,
};
use crate::date::{parse_timestamp, Timestamp};
use crate::error::{Result, TransformError};
use crate::raw_data::{RawStudentUserAccount, RawTeacherUserAccount, RawUser};
use crate::relation::optional_list;

/// Selects which account shape a user carries.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Teacher,
    Student,
}

impl FromStr for UserRole {
    type Err = TransformError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(TransformError::UnknownRole(other.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserGender {
    Male,
    Female,
}

/// Formats a display name as `Last, First` or `Last, First M.`.
pub fn full_name(first_name: &str, last_name: &str, middle_name: Option<&str>) -> String {
    let middle_initial = middle_name
        .unwrap_or_default()
        .chars()
        .take(1)
        .flat_map(char::to_uppercase)
        .collect::<String>();

    if middle_initial.is_empty() {
        format!("{last_name}, {first_name}")
    } else {
        format!("{last_name}, {first_name} {middle_initial}.")
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<UserApprovalStatus>,
    pub approval_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_account: Option<UserAccount>,
}

impl User {
    pub fn from_slice(raw_data: &[u8]) -> Result<Self> {
        let raw: RawUser = serde_json::from_slice(raw_data)?;

        raw.try_into()
    }

    pub fn teacher_account(&self) -> Option<&TeacherUserAccount> {
        match &self.user_account {
            Some(UserAccount::Teacher(account)) => Some(account),
            _ => None,
        }
    }

    pub fn student_account(&self) -> Option<&StudentUserAccount> {
        match &self.user_account {
            Some(UserAccount::Student(account)) => Some(account),
            _ => None,
        }
    }
}

impl TryFrom<RawUser> for User {
    type Error = TransformError;

    fn try_from(raw: RawUser) -> Result<Self> {
        let role = raw.role.parse::<UserRole>()?;
        let user_account = raw
            .user_account
            .map(|account| UserAccount::decode(role, account))
            .transpose()?;

        Ok(Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            supabase_user_id: raw.supabase_user_id,
            public_id: raw.public_id,
            role,
            email: raw.email,
            profile_image_url: raw.profile_image_url,
            approval_status: raw.approval_status,
            approval_date: parse_timestamp(raw.approval_date.as_deref()),
            user_account,
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum UserAccount {
    Teacher(TeacherUserAccount),
    Student(StudentUserAccount),
}

impl UserAccount {
    /// Decodes an account record in the shape `role` calls for.
    pub fn decode(role: UserRole, value: serde_json::Value) -> Result<Self> {
        let account = match role {
            UserRole::Teacher => {
                Self::Teacher(serde_json::from_value::<RawTeacherUserAccount>(value)?.into())
            }
            UserRole::Student => {
                Self::Student(serde_json::from_value::<RawStudentUserAccount>(value)?.into())
            }
        };

        Ok(account)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUserAccount {
    pub id: Id,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<UserApprovalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<UserGender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching_certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}

impl TeacherUserAccount {
    pub fn full_name(&self) -> String {
        full_name(
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default(),
            self.middle_name.as_deref(),
        )
    }
}

impl From<RawTeacherUserAccount> for TeacherUserAccount {
    fn from(raw: RawTeacherUserAccount) -> Self {
        let user = raw.user.unwrap_or_default();

        Self {
            id: raw.id,
            email: user.email,
            public_id: user.public_id,
            approval_status: user.approval_status,
            first_name: raw.first_name,
            last_name: raw.last_name,
            middle_name: raw.middle_name,
            birth_date: parse_timestamp(raw.birth_date.as_deref()),
            phone_number: raw.phone_number,
            gender: raw.gender,
            about_me: raw.about_me,
            educational_background: raw.educational_background,
            teaching_experience: raw.teaching_experience,
            teaching_certifications: raw.teaching_certifications,
            website: raw.website,
            social_media_links: raw.social_media_links,
            emails: raw.emails,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentUserAccount {
    pub id: Id,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<UserApprovalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<UserGender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_schedules: Option<Vec<LessonSchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_schedules: Option<Vec<ExamSchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_completions: Option<Vec<LessonCompletion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_completions: Option<Vec<ExamCompletion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_category_completions: Option<Vec<ActivityCategoryCompletion>>,
}

impl StudentUserAccount {
    pub fn full_name(&self) -> String {
        full_name(
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default(),
            self.middle_name.as_deref(),
        )
    }
}

impl From<RawStudentUserAccount> for StudentUserAccount {
    fn from(raw: RawStudentUserAccount) -> Self {
        let user = raw.user.unwrap_or_default();

        Self {
            id: raw.id,
            email: user.email,
            public_id: user.public_id,
            approval_status: user.approval_status,
            first_name: raw.first_name,
            last_name: raw.last_name,
            middle_name: raw.middle_name,
            birth_date: parse_timestamp(raw.birth_date.as_deref()),
            phone_number: raw.phone_number,
            gender: raw.gender,
            about_me: raw.about_me,
            teacher_id: raw.teacher_id,
            lesson_schedules: optional_list(raw.lesson_schedules, Into::into),
            exam_schedules: optional_list(raw.exam_schedules, Into::into),
            lesson_completions: optional_list(raw.lesson_completions, Into::into),
            exam_completions: optional_list(raw.exam_completions, Into::into),
            activity_category_completions: optional_list(
                raw.activity_category_completions,
                Into::into,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_with_and_without_middle_initial() {
        assert_eq!(full_name("Ada", "Lovelace", None), "Lovelace, Ada");
        assert_eq!(full_name("Ada", "Lovelace", Some("")), "Lovelace, Ada");
        assert_eq!(full_name("Ada", "Lovelace", Some("byron")), "Lovelace, Ada B.");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "admin".parse::<UserRole>().unwrap_err();

        assert!(matches!(err, TransformError::UnknownRole(role) if role == "admin"));
    }
}
