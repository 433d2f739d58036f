use anyhow::Result;
use clap::Args;
use lms_transform::raw_data::{RawExam, RawLesson, RawUser};
use lms_transform::{Exam, Lesson, User};
use serde_json::Value;

use crate::api::ApiClient;
use crate::cache::{QueryCache, QueryKey};

/// Selects a single lesson or exam.
#[derive(Args, Debug, Clone, Default)]
pub struct SlugParams {
    #[clap(long, value_parser)]
    pub slug: String,

    /// Comma separated relations to include.
    #[clap(long, value_parser)]
    pub include: Option<String>,

    /// Comma separated fields to leave out.
    #[clap(long, value_parser)]
    pub exclude: Option<String>,
}

impl SlugParams {
    fn query_key(&self, scope: &str) -> QueryKey {
        let mut parts = vec![scope.to_owned(), "single".to_owned(), self.slug.clone()];

        parts.extend(self.include.iter().map(|include| format!("include={include}")));
        parts.extend(self.exclude.iter().map(|exclude| format!("exclude={exclude}")));

        QueryKey::new(parts)
    }

    fn query(&self) -> Vec<(&str, &str)> {
        [("include", &self.include), ("exclude", &self.exclude)]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
            .collect()
    }
}

pub fn current_user_key() -> QueryKey {
    QueryKey::new(["users", "current-user"])
}

/// Returns the cached result for `key`, fetching and storing it on a miss.
async fn cached_query(
    api: &ApiClient,
    cache: &dyn QueryCache,
    key: &QueryKey,
    path: &[&str],
    query: &[(&str, &str)],
) -> Result<Value> {
    if let Some(value) = cache.get(key) {
        tracing::debug!(%key, "query cache hit");

        return Ok(value);
    }

    let value = api.get_json(path, query).await?;
    cache.set(key, value.clone());

    tracing::info!(%key, "query fetched");

    Ok(value)
}

pub async fn lesson_by_slug(
    api: &ApiClient,
    cache: &dyn QueryCache,
    params: &SlugParams,
) -> Result<Lesson> {
    let key = params.query_key("lessons");
    let path = ["lessons", "slug", params.slug.as_str()];
    let value = cached_query(api, cache, &key, &path, &params.query()).await?;

    Ok(serde_json::from_value::<RawLesson>(value)?.into())
}

pub async fn exam_by_slug(
    api: &ApiClient,
    cache: &dyn QueryCache,
    params: &SlugParams,
) -> Result<Exam> {
    let key = params.query_key("exams");
    let path = ["exams", "slug", params.slug.as_str()];
    let value = cached_query(api, cache, &key, &path, &params.query()).await?;

    Ok(serde_json::from_value::<RawExam>(value)?.into())
}

pub async fn current_user(api: &ApiClient, cache: &dyn QueryCache) -> Result<User> {
    let value = cached_query(api, cache, &current_user_key(), &["users", "me"], &[]).await?;

    Ok(User::try_from(serde_json::from_value::<RawUser>(value)?)?)
}
