use pokedex_model::{Category, Dataset, Entity, Move};
use tracing::debug;

use crate::sort::sort_entities;
use crate::QueryResult;

/// First category whose name equals `name` exactly.
pub fn find_category<'a>(dataset: &'a Dataset, name: &str) -> Option<&'a Category> {
    dataset.categories.iter().find(|c| c.name == name)
}

/// First entity whose name equals `name` exactly.
pub fn find_entity<'a>(dataset: &'a Dataset, name: &str) -> Option<&'a Entity> {
    dataset.entities.iter().find(|e| e.name == name)
}

/// First move whose name equals `name` exactly.
pub fn find_move<'a>(dataset: &'a Dataset, name: &str) -> Option<&'a Move> {
    dataset.moves.iter().find(|m| m.name == name)
}

/// Entities whose primary category is `category`, in load order.
///
/// Matching is exact and case-sensitive. The secondary category is never
/// consulted, so a Grass/Poison entity is not listed under `"Poison"`.
pub fn filter_by_category<'a>(dataset: &'a Dataset, category: &str) -> Vec<&'a Entity> {
    dataset
        .entities
        .iter()
        .filter(|e| e.has_primary_category(category))
        .collect()
}

/// [`filter_by_category`] followed by [`sort_entities`].
///
/// An empty `sort_key` leaves load order intact. An unknown key is an error
/// even when no entity matches.
pub fn list_by_category<'a>(
    dataset: &'a Dataset,
    category: &str,
    sort_key: &str,
) -> QueryResult<Vec<&'a Entity>> {
    let mut entities = filter_by_category(dataset, category);
    sort_entities(sort_key, &mut entities)?;
    debug!(
        "list_by_category({:?}, {:?}) -> {} entities",
        category,
        sort_key,
        entities.len()
    );
    Ok(entities)
}
