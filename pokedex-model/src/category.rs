use serde::{Deserialize, Serialize};

use crate::de;

/// An elemental type with asymmetric relations to other types.
///
/// `name` is the lookup key. The relation lists hold other category names
/// and are not checked against the loaded set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub effective_against: Vec<String>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub weak_against: Vec<String>,
}
