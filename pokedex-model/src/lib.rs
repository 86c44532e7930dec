//! Record model for the Pokédex service.
//!
//! Defines the three record kinds held by a loaded dataset:
//! - [`Category`]: an elemental type with strong/weak relations to other types
//! - [`Entity`]: a creature with categories, stats, and evolution links
//! - [`Move`]: an attack with a category, cost, and damage profile
//!
//! [`Dataset`] holds all three in load order and is the unit the loader
//! produces. Field names on the wire match `data.json` exactly
//! (`"Type I"`, `"Fast Attack(s)"`, ...), and every field is optional.

mod category;
mod dataset;
mod de;
mod entity;
mod error;
mod moves;

pub use category::Category;
pub use dataset::{Dataset, DatasetSummary};
pub use entity::{Candy, Entity, EvolutionRef, EvolutionRequirement};
pub use error::{ModelError, ModelResult};
pub use moves::Move;
