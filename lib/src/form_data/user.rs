use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::data::{User, UserApprovalStatus, UserGender};
use crate::date::{calendar_date, Timestamp};

/// The birth date as the calendar day seen in `tz`.
fn birth_date<Tz: TimeZone>(timestamp: Option<&Timestamp>, tz: &Tz) -> Option<NaiveDate> {
    timestamp
        .and_then(Timestamp::as_date_time)
        .map(|date_time| date_time.with_timezone(tz).date_naive())
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUserFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only ever typed in by the user.
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
    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
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

impl TeacherUserFormData {
    /// `None` unless the user carries a teacher account.
    pub fn from_user<Tz: TimeZone>(user: &User, tz: &Tz) -> Option<Self> {
        let account = user.teacher_account()?;

        Some(Self {
            email: account.email.clone().or_else(|| user.email.clone()),
            password: None,
            approval_status: account.approval_status.or(user.approval_status),
            profile_image_url: user.profile_image_url.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            middle_name: account.middle_name.clone(),
            birth_date: birth_date(account.birth_date.as_ref(), tz),
            phone_number: account.phone_number.clone(),
            gender: account.gender,
            about_me: account.about_me.clone(),
            educational_background: account.educational_background.clone(),
            teaching_experience: account.teaching_experience.clone(),
            teaching_certifications: account.teaching_certifications.clone(),
            website: account.website.clone(),
            social_media_links: account.social_media_links.clone(),
            emails: account.emails.clone(),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentUserFormData {
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
    #[serde(default, with = "calendar_date", skip_serializing_if = "Option::is_none")]
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

impl StudentUserFormData {
    /// `None` unless the user carries a student account.
    pub fn from_user<Tz: TimeZone>(user: &User, tz: &Tz) -> Option<Self> {
        let account = user.student_account()?;

        Some(Self {
            email: account.email.clone().or_else(|| user.email.clone()),
            password: None,
            approval_status: account.approval_status.or(user.approval_status),
            profile_image_url: user.profile_image_url.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            middle_name: account.middle_name.clone(),
            birth_date: birth_date(account.birth_date.as_ref(), tz),
            phone_number: account.phone_number.clone(),
            gender: account.gender,
            about_me: account.about_me.clone(),
            teacher_id: account.teacher_id.clone(),
        })
    }
}
