use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{BaseModel, IdRef, RecordStatus};
use crate::error::{Result, TransformError};
use crate::raw_data::{
    RawActivity, RawActivityCategory, RawActivityCategoryCompletion, RawActivityGame,
};
use crate::relation::optional_list;

/// Scoring rule of an activity's game. Selects the category detail shape.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Point,
    Time,
}

impl FromStr for GameType {
    type Err = TransformError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "point" => Ok(Self::Point),
            "time" => Ok(Self::Time),
            other => Err(TransformError::UnknownGameType(other.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategoryLevel {
    Easy,
    Moderate,
    Hard,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ActivityGame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub game_type: GameType,
}

impl TryFrom<RawActivityGame> for ActivityGame {
    type Error = TransformError;

    fn try_from(raw: RawActivityGame) -> Result<Self> {
        Ok(Self {
            name: raw.name,
            game_type: raw.game_type.parse()?,
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
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
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub game: ActivityGame,
    pub categories: Vec<ActivityCategory>,
}

impl Activity {
    pub fn from_slice(raw_data: &[u8]) -> Result<Self> {
        let raw: RawActivity = serde_json::from_slice(raw_data)?;

        raw.try_into()
    }

    pub fn is_completed(&self) -> bool {
        self.categories.iter().any(ActivityCategory::is_completed)
    }

    /// Points collected across every category. Only point games keep a
    /// score; `None` until something has been completed.
    pub fn total_score(&self) -> Option<f64> {
        if !self.is_completed() {
            return None;
        }

        match self.game.game_type {
            GameType::Point => Some(
                self.categories
                    .iter()
                    .flat_map(|category| category.completions.iter().flatten())
                    .map(|completion| completion.score.unwrap_or(0.0))
                    .sum(),
            ),
            GameType::Time => None,
        }
    }
}

impl TryFrom<RawActivity> for Activity {
    type Error = TransformError;

    fn try_from(raw: RawActivity) -> Result<Self> {
        let game = ActivityGame::try_from(raw.game)?;
        let categories = raw
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(|category| ActivityCategory::new(category, game.game_type))
            .collect();

        Ok(Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            status: raw.status,
            order_number: raw.order_number,
            title: raw.title,
            slug: raw.slug,
            description: raw.description,
            excerpt: raw.excerpt,
            game,
            categories,
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCategoryTypePoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCategoryTypeTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer_count: Option<u32>,
}

/// The per-game settings of a category, serialized under `typePoint` or
/// `typeTime`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub enum ActivityCategoryDetail {
    #[serde(rename = "typePoint")]
    Point(ActivityCategoryTypePoint),
    #[serde(rename = "typeTime")]
    Time(ActivityCategoryTypeTime),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCategory {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<ActivityCategoryLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub randomize_questions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_questions_count: Option<u32>,
    #[serde(flatten)]
    pub detail: ActivityCategoryDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completions: Option<Vec<ActivityCategoryCompletion>>,
}

impl ActivityCategory {
    pub fn new(raw: RawActivityCategory, game_type: GameType) -> Self {
        let detail = match game_type {
            GameType::Point => ActivityCategoryDetail::Point(ActivityCategoryTypePoint {
                duration_seconds: raw.type_point.and_then(|point| point.duration_seconds),
            }),
            GameType::Time => ActivityCategoryDetail::Time(ActivityCategoryTypeTime {
                correct_answer_count: raw.type_time.and_then(|time| time.correct_answer_count),
            }),
        };

        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            level: raw.level,
            randomize_questions: raw.randomize_questions,
            visible_questions_count: raw.visible_questions_count,
            detail,
            completions: optional_list(raw.completions, Into::into),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completions
            .as_ref()
            .map_or(false, |completions| !completions.is_empty())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCategoryCompletion {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_completed_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_category: Option<IdRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<IdRef>,
}

impl From<RawActivityCategoryCompletion> for ActivityCategoryCompletion {
    fn from(raw: RawActivityCategoryCompletion) -> Self {
        Self {
            base: BaseModel::new(raw.id, raw.created_at.as_deref(), raw.updated_at.as_deref()),
            score: raw.score,
            time_completed_seconds: raw.time_completed_seconds,
            activity_category: raw.activity_category.map(Into::into),
            student: raw.student.map(Into::into),
        }
    }
}
