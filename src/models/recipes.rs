use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::models::categories::Category;

pub const TITLE_MAX_LEN: usize = 140;
pub const SHORT_DESCRIPTION_MAX_LEN: usize = 300;
pub const SOURCE_REFERENCE_MAX_LEN: usize = 120;
pub const IMAGE_URL_MAX_LEN: usize = 300;

/// Where a recipe is drawn from: a hadith, the Qur'an, or general healthy
/// eating advice.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum SourceType {
    Hadis,
    Kuran,
    #[default]
    Zdravo,
}

impl TryFrom<String> for SourceType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A recipe with its category embedded, as returned by every recipe read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub short_description: Option<String>,
    pub instructions: String,
    pub source_type: SourceType,
    pub source_reference: Option<String>,
    pub image_url: Option<String>,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Category")]
    pub category: Category,
}

/// Flat row of `recipes JOIN categories`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub short_description: Option<String>,
    pub instructions: String,
    #[sqlx(try_from = "String")]
    pub source_type: SourceType,
    pub source_reference: Option<String>,
    pub image_url: Option<String>,
    pub category_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_name: String,
    pub category_created_at: DateTime<Utc>,
    pub category_updated_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            short_description: row.short_description,
            instructions: row.instructions,
            source_type: row.source_type,
            source_reference: row.source_reference,
            image_url: row.image_url,
            category_id: row.category_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            category: Category {
                id: row.category_id,
                name: row.category_name,
                created_at: row.category_created_at,
                updated_at: row.category_updated_at,
            },
        }
    }
}

/// Column values written by an insert or a full-row update.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFields {
    pub title: String,
    pub short_description: Option<String>,
    pub instructions: String,
    pub source_type: SourceType,
    pub source_reference: Option<String>,
    pub image_url: Option<String>,
    pub category_id: i64,
}

impl From<&Recipe> for RecipeFields {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            short_description: recipe.short_description.clone(),
            instructions: recipe.instructions.clone(),
            source_type: recipe.source_type,
            source_reference: recipe.source_reference.clone(),
            image_url: recipe.image_url.clone(),
            category_id: recipe.category_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub source_reference: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update: every field is optional and an omitted (or `null`)
/// field keeps its stored value, even though the route is a PUT.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub source_type: Option<SourceType>,
    #[serde(default)]
    pub source_reference: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
