//! Sort-key table for entity listings.
//!
//! Every key sorts descending. `Height` and `Weight` compare the raw
//! unit-suffixed strings, so `"10.0 kg"` sorts below `"9.0 kg"`; the numeric
//! keys compare values.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use pokedex_model::Entity;

use crate::{QueryError, QueryResult};

/// Orders two entities; `Less` means `a` is listed first.
pub type Comparator = fn(&Entity, &Entity) -> Ordering;

/// A token naming the field a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Height,
    Weight,
    BaseAttack,
    BaseDefense,
    BaseStamina,
    CaptureRate,
    FleeRate,
    BuddyDistanceNeeded,
}

impl SortKey {
    /// Every key, in the order shown in usage text.
    pub const ALL: [SortKey; 8] = [
        SortKey::Height,
        SortKey::Weight,
        SortKey::BaseAttack,
        SortKey::BaseDefense,
        SortKey::BaseStamina,
        SortKey::CaptureRate,
        SortKey::FleeRate,
        SortKey::BuddyDistanceNeeded,
    ];

    /// The token accepted in `/list/{type}/sortBy{token}`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Height => "Height",
            SortKey::Weight => "Weight",
            SortKey::BaseAttack => "BaseAttack",
            SortKey::BaseDefense => "BaseDefense",
            SortKey::BaseStamina => "BaseStamina",
            SortKey::CaptureRate => "CaptureRate",
            SortKey::FleeRate => "FleeRate",
            SortKey::BuddyDistanceNeeded => "BuddyDistanceNeeded",
        }
    }

    /// Descending comparator for this key.
    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Height => |a, b| b.height.cmp(&a.height),
            SortKey::Weight => |a, b| b.weight.cmp(&a.weight),
            SortKey::BaseAttack => |a, b| b.base_attack.cmp(&a.base_attack),
            SortKey::BaseDefense => |a, b| b.base_defense.cmp(&a.base_defense),
            SortKey::BaseStamina => |a, b| b.base_stamina.cmp(&a.base_stamina),
            SortKey::CaptureRate => |a, b| b.capture_rate.total_cmp(&a.capture_rate),
            SortKey::FleeRate => |a, b| b.flee_rate.total_cmp(&a.flee_rate),
            SortKey::BuddyDistanceNeeded => {
                |a, b| b.buddy_distance_needed.cmp(&a.buddy_distance_needed)
            }
        }
    }

    /// Whether this key compares strings rather than numbers.
    pub const fn is_lexicographic(self) -> bool {
        matches!(self, SortKey::Height | SortKey::Weight)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QueryError::InvalidSortKey(s.to_string()))
    }
}

/// Stable descending sort of `entities` by the field `key` names.
///
/// An empty `key` is a no-op. An unknown key returns
/// [`QueryError::InvalidSortKey`] and leaves `entities` untouched.
pub fn sort_entities(key: &str, entities: &mut [&Entity]) -> QueryResult<()> {
    if key.is_empty() {
        return Ok(());
    }
    let compare = key.parse::<SortKey>()?.comparator();
    entities.sort_by(|a, b| compare(a, b));
    Ok(())
}
