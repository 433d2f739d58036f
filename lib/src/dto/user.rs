use chrono::NaiveDate;
use serde::Serialize;

use super::strip_non_digits;
use crate::data::{UserApprovalStatus, UserGender};
use crate::date::calendar_date;
use crate::form_data::{StudentUserFormData, TeacherUserFormData};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUserCreateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<UserApprovalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
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

impl From<TeacherUserFormData> for TeacherUserCreateDto {
    fn from(form: TeacherUserFormData) -> Self {
        Self {
            email: form.email,
            password: form.password,
            approval_status: form.approval_status,
            profile_image_url: form.profile_image_url,
            first_name: form.first_name,
            last_name: form.last_name,
            middle_name: form.middle_name,
            birth_date: form.birth_date,
            phone_number: form.phone_number.as_deref().map(strip_non_digits),
            gender: form.gender,
            about_me: form.about_me,
            educational_background: form.educational_background,
            teaching_experience: form.teaching_experience,
            teaching_certifications: form.teaching_certifications,
            website: form.website,
            social_media_links: form.social_media_links,
            emails: form.emails,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentUserCreateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<UserApprovalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(with = "calendar_date", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<UserGender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
}

impl From<StudentUserFormData> for StudentUserCreateDto {
    fn from(form: StudentUserFormData) -> Self {
        Self {
            email: form.email,
            password: form.password,
            approval_status: form.approval_status,
            profile_image_url: form.profile_image_url,
            first_name: form.first_name,
            last_name: form.last_name,
            middle_name: form.middle_name,
            birth_date: form.birth_date,
            phone_number: form.phone_number.as_deref().map(strip_non_digits),
            gender: form.gender,
            about_me: form.about_me,
            teacher_id: form
                .teacher_id
                .filter(|teacher_id| !teacher_id.is_empty())
                .map(|teacher_id| teacher_id.to_uppercase()),
        }
    }
}
