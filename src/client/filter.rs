use crate::models::recipes::Recipe;

/// Case-insensitive substring search over the loaded recipe list.
///
/// Matches title, short description, source reference and category name.
/// A blank query keeps every recipe.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|recipe| {
            let fields = [
                Some(recipe.title.as_str()),
                recipe.short_description.as_deref(),
                recipe.source_reference.as_deref(),
                Some(recipe.category.name.as_str()),
            ];
            fields
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
