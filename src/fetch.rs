use anyhow::{bail, Result};
use chrono::FixedOffset;
use clap::Subcommand;
use lms_transform::form_data::{
    ExamUpsertFormData, LessonUpsertFormData, StudentUserFormData, TeacherUserFormData,
};
use lms_transform::UserRole;

use crate::api::ApiClient;
use crate::cache::QueryCache;
use crate::helpers::write_output;
use crate::loader::{current_user, exam_by_slug, lesson_by_slug, SlugParams};

#[derive(Subcommand, Debug)]
pub enum Query {
    Lesson {
        #[clap(flatten)]
        params: SlugParams,

        /// Print the editor form instead of the entity.
        #[clap(long, action)]
        form: bool,
    },
    Exam {
        #[clap(flatten)]
        params: SlugParams,

        #[clap(long, action)]
        form: bool,
    },
    CurrentUser {
        #[clap(long, action)]
        form: bool,
    },
}

pub async fn fetch(
    api: &ApiClient,
    cache: &dyn QueryCache,
    query: Query,
    tz: &FixedOffset,
) -> Result<()> {
    match query {
        Query::Lesson { params, form } => {
            let lesson = lesson_by_slug(api, cache, &params).await?;

            if form {
                write_output(&LessonUpsertFormData::from_lesson(&lesson, tz))
            } else {
                write_output(&lesson)
            }
        }
        Query::Exam { params, form } => {
            let exam = exam_by_slug(api, cache, &params).await?;

            if form {
                write_output(&ExamUpsertFormData::from_exam(&exam, tz))
            } else {
                write_output(&exam)
            }
        }
        Query::CurrentUser { form: false } => write_output(&current_user(api, cache).await?),
        Query::CurrentUser { form: true } => {
            let user = current_user(api, cache).await?;

            match user.role {
                UserRole::Teacher => match TeacherUserFormData::from_user(&user, tz) {
                    Some(form) => write_output(&form),
                    None => bail!("teacher {} has no account record", user.base.id),
                },
                UserRole::Student => match StudentUserFormData::from_user(&user, tz) {
                    Some(form) => write_output(&form),
                    None => bail!("student {} has no account record", user.base.id),
                },
            }
        }
    }
}
