//! Read-only queries over a loaded [`Dataset`](pokedex_model::Dataset).
//!
//! - [`find_category`], [`find_entity`], [`find_move`]: first exact name match
//! - [`filter_by_category`] / [`list_by_category`]: entities of one primary type
//! - [`sort_entities`]: stable descending sort keyed by a [`SortKey`] token
//!
//! Nothing here mutates the dataset; results borrow from it.

mod error;
mod lookup;
mod sort;

pub use error::{QueryError, QueryResult, RecordKind};
pub use lookup::{filter_by_category, find_category, find_entity, find_move, list_by_category};
pub use sort::{sort_entities, Comparator, SortKey};
