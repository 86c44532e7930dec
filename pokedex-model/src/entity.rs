use serde::{Deserialize, Serialize};

use crate::de;

/// A creature record from the `pokemons` array.
///
/// `Type I` and `Type II` are stored as lists because the source data wraps
/// single types in arrays; the first element of `type_i` is the primary
/// category. Height and weight stay as the unit-suffixed strings found in
/// the file (`"0.71 m"`, `"6.9 kg"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    #[serde(rename = "Number", deserialize_with = "de::string_or_number")]
    pub number: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Classification")]
    pub classification: String,
    #[serde(rename = "Type I", deserialize_with = "de::one_or_many")]
    pub type_i: Vec<String>,
    #[serde(rename = "Type II", deserialize_with = "de::one_or_many")]
    pub type_ii: Vec<String>,
    #[serde(rename = "Weaknesses", deserialize_with = "de::null_as_default")]
    pub weaknesses: Vec<String>,
    #[serde(rename = "Fast Attack(s)", deserialize_with = "de::null_as_default")]
    pub fast_attacks: Vec<String>,
    #[serde(rename = "Special Attack(s)", deserialize_with = "de::null_as_default")]
    pub special_attacks: Vec<String>,
    #[serde(rename = "Weight")]
    pub weight: String,
    #[serde(rename = "Height")]
    pub height: String,
    #[serde(rename = "Candy", skip_serializing_if = "Option::is_none")]
    pub candy: Option<Candy>,
    #[serde(
        rename = "Next Evolution Requirements",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_evolution_requirements: Option<EvolutionRequirement>,
    #[serde(rename = "Next evolution(s)", deserialize_with = "de::null_as_default")]
    pub next_evolutions: Vec<EvolutionRef>,
    #[serde(
        rename = "Previous evolution(s)",
        deserialize_with = "de::null_as_default"
    )]
    pub previous_evolutions: Vec<EvolutionRef>,
    #[serde(rename = "BaseAttack")]
    pub base_attack: u32,
    #[serde(rename = "BaseDefense")]
    pub base_defense: u32,
    #[serde(rename = "BaseStamina")]
    pub base_stamina: u32,
    /// Probability in `[0, 1]`.
    #[serde(rename = "CaptureRate")]
    pub capture_rate: f64,
    /// Probability in `[0, 1]`.
    #[serde(rename = "FleeRate")]
    pub flee_rate: f64,
    /// Kilometres walked per candy.
    #[serde(rename = "BuddyDistanceNeeded")]
    pub buddy_distance_needed: u32,
}

impl Entity {
    /// The primary category, if the record has one.
    pub fn primary_category(&self) -> Option<&str> {
        self.type_i.first().map(String::as_str)
    }

    /// Exact, case-sensitive match against the first `Type I` element.
    /// Later `Type I` elements and `Type II` are ignored.
    pub fn has_primary_category(&self, category: &str) -> bool {
        self.primary_category() == Some(category)
    }
}

/// The candy an evolution line shares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candy {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "FamilyID")]
    pub family_id: u32,
}

/// Candy cost for the next evolution step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionRequirement {
    #[serde(rename = "Amount")]
    pub amount: u32,
    /// Family id shared by every stage of an evolution line.
    #[serde(rename = "Family")]
    pub family: u32,
    /// Candy name, e.g. `"Bulbasaur candies"`.
    #[serde(rename = "Name")]
    pub name: String,
}

/// A link to another record in the same evolution line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionRef {
    #[serde(rename = "Number", deserialize_with = "de::string_or_number")]
    pub number: String,
    #[serde(rename = "Name")]
    pub name: String,
}
