use crate::DbConn;
use crate::{
    error::{Error, Result},
    models::recipes::{
        CreateRecipeRequest, Recipe, RecipeFields, UpdateRecipeRequest, IMAGE_URL_MAX_LEN,
        SHORT_DESCRIPTION_MAX_LEN, SOURCE_REFERENCE_MAX_LEN, TITLE_MAX_LEN,
    },
    queries::{
        categories,
        recipes::{self, INVALID_CATEGORY_MESSAGE},
    },
    validation::{non_blank, validate_max_len, validate_optional_max_len},
};

pub(crate) const RECIPE_NOT_FOUND_MESSAGE: &str = "Recept nije pronađen.";

/// Lists all recipes with their category, newest first
pub async fn list_recipes(conn: &mut DbConn) -> Result<Vec<Recipe>> {
    recipes::list_recipes(conn).await
}

/// Gets a recipe with its category, failing with `NotFound` when absent
pub async fn get_recipe(conn: &mut DbConn, id: i64) -> Result<Recipe> {
    recipes::get_recipe_by_id(conn, id)
        .await?
        .ok_or_else(|| Error::NotFound(RECIPE_NOT_FOUND_MESSAGE.to_string()))
}

/// Creates a recipe in an existing category
pub async fn create_recipe(conn: &mut DbConn, request: CreateRecipeRequest) -> Result<Recipe> {
    let title = non_blank(request.title.as_deref());
    let instructions = non_blank(request.instructions.as_deref());

    let (Some(title), Some(instructions), Some(category_id)) = (title, instructions, request.category_id)
    else {
        return Err(Error::Validation(
            "Naslov, upute i categoryId su obavezni.".to_string(),
        ));
    };

    let fields = RecipeFields {
        title: title.to_string(),
        short_description: request.short_description,
        instructions: instructions.to_string(),
        source_type: request.source_type.unwrap_or_default(),
        source_reference: request.source_reference,
        image_url: request.image_url,
        category_id,
    };
    validate_fields(&fields)?;
    ensure_category_exists(conn, category_id).await?;

    let id = recipes::create_recipe(conn, &fields).await?;
    tracing::info!(recipe_id = id, category_id, "Recipe created");
    get_recipe(conn, id).await
}

/// Applies a partial update to a recipe.
///
/// PUT here behaves like PATCH: only supplied fields change, omitted ones
/// keep their stored value. The client forms depend on this.
pub async fn update_recipe(conn: &mut DbConn, id: i64, request: UpdateRecipeRequest) -> Result<Recipe> {
    let existing = get_recipe(conn, id).await?;
    let mut fields = RecipeFields::from(&existing);

    if let Some(category_id) = request.category_id {
        ensure_category_exists(conn, category_id).await?;
        fields.category_id = category_id;
    }
    if let Some(title) = request.title {
        fields.title = required_text(&title, "Naslov ne može biti prazan.")?;
    }
    if let Some(instructions) = request.instructions {
        fields.instructions = required_text(&instructions, "Upute ne mogu biti prazne.")?;
    }
    if let Some(short_description) = request.short_description {
        fields.short_description = Some(short_description);
    }
    if let Some(source_type) = request.source_type {
        fields.source_type = source_type;
    }
    if let Some(source_reference) = request.source_reference {
        fields.source_reference = Some(source_reference);
    }
    if let Some(image_url) = request.image_url {
        fields.image_url = Some(image_url);
    }

    validate_fields(&fields)?;

    if fields != RecipeFields::from(&existing) {
        recipes::update_recipe(conn, id, &fields).await?;
        tracing::info!(recipe_id = id, "Recipe updated");
    }
    get_recipe(conn, id).await
}

/// Permanently deletes a recipe
pub async fn delete_recipe(conn: &mut DbConn, id: i64) -> Result<()> {
    let rows_affected = recipes::delete_recipe(conn, id).await?;
    if rows_affected == 0 {
        return Err(Error::NotFound(RECIPE_NOT_FOUND_MESSAGE.to_string()));
    }

    tracing::info!(recipe_id = id, "Recipe deleted");
    Ok(())
}

async fn ensure_category_exists(conn: &mut DbConn, category_id: i64) -> Result<()> {
    if categories::get_category_by_id(conn, category_id).await?.is_none() {
        return Err(Error::Validation(INVALID_CATEGORY_MESSAGE.to_string()));
    }
    Ok(())
}

fn required_text(value: &str, message: &str) -> Result<String> {
    non_blank(Some(value))
        .map(str::to_string)
        .ok_or_else(|| Error::Validation(message.to_string()))
}

fn validate_fields(fields: &RecipeFields) -> Result<()> {
    validate_max_len("title", &fields.title, TITLE_MAX_LEN)?;
    validate_optional_max_len(
        "shortDescription",
        fields.short_description.as_deref(),
        SHORT_DESCRIPTION_MAX_LEN,
    )?;
    validate_optional_max_len(
        "sourceReference",
        fields.source_reference.as_deref(),
        SOURCE_REFERENCE_MAX_LEN,
    )?;
    validate_optional_max_len("imageUrl", fields.image_url.as_deref(), IMAGE_URL_MAX_LEN)?;
    Ok(())
}
