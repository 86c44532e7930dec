use pokedex_model::{Candy, Category, Entity, EvolutionRef, EvolutionRequirement, Move};
use pretty_assertions::assert_eq;
use serde_json::json;

fn bulbasaur_json() -> serde_json::Value {
    json!({
        "Number": "001",
        "Name": "Bulbasaur",
        "Classification": "Seed Pokèmon",
        "Type I": ["Grass"],
        "Type II": ["Poison"],
        "Weaknesses": ["Fire", "Ice", "Flying", "Psychic"],
        "Fast Attack(s)": ["Tackle", "Vine Whip"],
        "Weight": "6.9 kg",
        "Height": "0.7 m",
        "Candy": {"Name": "Bulbasaur Candy", "FamilyID": 1},
        "Next Evolution Requirements": {
            "Amount": 25,
            "Family": 1,
            "Name": "Bulbasaur candies"
        },
        "Next evolution(s)": [
            {"Number": 2, "Name": "Ivysaur"},
            {"Number": 3, "Name": "Venusaur"}
        ],
        "Special Attack(s)": ["Power Whip", "Seed Bomb", "Sludge Bomb"],
        "BaseAttack": 118,
        "BaseDefense": 118,
        "BaseStamina": 90,
        "CaptureRate": 0.16,
        "FleeRate": 0.1,
        "BuddyDistanceNeeded": 3
    })
}

// ── Entity decoding ──────────────────────────────────────────────

#[test]
fn entity_decodes_exact_field_labels() {
    let e: Entity = serde_json::from_value(bulbasaur_json()).unwrap();
    assert_eq!(e.number, "001");
    assert_eq!(e.name, "Bulbasaur");
    assert_eq!(e.classification, "Seed Pokèmon");
    assert_eq!(e.type_i, vec!["Grass"]);
    assert_eq!(e.type_ii, vec!["Poison"]);
    assert_eq!(e.weaknesses.len(), 4);
    assert_eq!(e.fast_attacks, vec!["Tackle", "Vine Whip"]);
    assert_eq!(e.special_attacks.len(), 3);
    assert_eq!(e.weight, "6.9 kg");
    assert_eq!(e.height, "0.7 m");
    assert_eq!(e.base_attack, 118);
    assert_eq!(e.base_defense, 118);
    assert_eq!(e.base_stamina, 90);
    assert!((e.capture_rate - 0.16).abs() < 1e-9);
    assert!((e.flee_rate - 0.1).abs() < 1e-9);
    assert_eq!(e.buddy_distance_needed, 3);
}

#[test]
fn entity_decodes_evolution_metadata() {
    let e: Entity = serde_json::from_value(bulbasaur_json()).unwrap();
    assert_eq!(
        e.next_evolution_requirements,
        Some(EvolutionRequirement {
            amount: 25,
            family: 1,
            name: "Bulbasaur candies".to_string(),
        })
    );
    assert_eq!(
        e.next_evolutions,
        vec![
            EvolutionRef { number: "2".into(), name: "Ivysaur".into() },
            EvolutionRef { number: "3".into(), name: "Venusaur".into() },
        ]
    );
    assert!(e.previous_evolutions.is_empty());
}

#[test]
fn entity_decodes_candy() {
    let e: Entity = serde_json::from_value(bulbasaur_json()).unwrap();
    assert_eq!(
        e.candy,
        Some(Candy {
            name: "Bulbasaur Candy".to_string(),
            family_id: 1,
        })
    );
}

#[test]
fn entity_missing_fields_are_zero_valued() {
    let e: Entity = serde_json::from_value(json!({"Name": "Missingno"})).unwrap();
    assert_eq!(e.name, "Missingno");
    assert_eq!(e.number, "");
    assert!(e.type_i.is_empty());
    assert!(e.type_ii.is_empty());
    assert!(e.next_evolution_requirements.is_none());
    assert!(e.candy.is_none());
    assert_eq!(e.base_attack, 0);
    assert_eq!(e.capture_rate, 0.0);
}

#[test]
fn entity_null_fields_are_zero_valued() {
    let e: Entity = serde_json::from_value(json!({
        "Name": "Ditto",
        "Type II": null,
        "Weaknesses": null,
        "Next Evolution Requirements": null,
        "Previous evolution(s)": null
    }))
    .unwrap();
    assert!(e.type_ii.is_empty());
    assert!(e.weaknesses.is_empty());
    assert!(e.next_evolution_requirements.is_none());
    assert!(e.previous_evolutions.is_empty());
}

#[test]
fn type_columns_accept_bare_string() {
    let e: Entity =
        serde_json::from_value(json!({"Type I": "Fire", "Type II": "Flying"})).unwrap();
    assert_eq!(e.type_i, vec!["Fire"]);
    assert_eq!(e.type_ii, vec!["Flying"]);
}

#[test]
fn evolution_number_accepts_string() {
    let e: Entity = serde_json::from_value(json!({
        "Previous evolution(s)": [{"Number": "001", "Name": "Bulbasaur"}]
    }))
    .unwrap();
    assert_eq!(e.previous_evolutions[0].number, "001");
}

#[test]
fn wrong_shape_is_rejected() {
    let result: Result<Entity, _> = serde_json::from_value(json!({"BaseAttack": "strong"}));
    assert!(result.is_err());
}

// ── Category helpers ─────────────────────────────────────────────

#[test]
fn primary_category_is_first_type_i_element() {
    let e: Entity = serde_json::from_value(bulbasaur_json()).unwrap();
    assert_eq!(e.primary_category(), Some("Grass"));
    assert_eq!(Entity::default().primary_category(), None);
}

#[test]
fn has_primary_category_is_exact_and_ignores_type_ii() {
    let e: Entity = serde_json::from_value(bulbasaur_json()).unwrap();
    assert!(e.has_primary_category("Grass"));
    assert!(!e.has_primary_category("grass"));
    assert!(!e.has_primary_category("Poison"));
    assert!(!e.has_primary_category(""));
}

#[test]
fn has_primary_category_ignores_later_type_i_elements() {
    let e: Entity =
        serde_json::from_value(json!({"Name": "Oddish", "Type I": ["Grass", "Poison"]})).unwrap();
    assert_eq!(e.primary_category(), Some("Grass"));
    assert!(e.has_primary_category("Grass"));
    assert!(!e.has_primary_category("Poison"));
}

#[test]
fn category_decodes_camel_case_relations() {
    let c: Category = serde_json::from_value(json!({
        "name": "Fire",
        "effectiveAgainst": ["Bug", "Steel", "Grass", "Ice"],
        "weakAgainst": ["Dragon", "Water", "Rock"]
    }))
    .unwrap();
    assert_eq!(c.name, "Fire");
    assert_eq!(c.effective_against, vec!["Bug", "Steel", "Grass", "Ice"]);
    assert_eq!(c.weak_against, vec!["Dragon", "Water", "Rock"]);
}

// ── Move decoding ────────────────────────────────────────────────

fn wrap() -> Move {
    Move {
        id: 13,
        name: "Wrap".into(),
        category: "Normal".into(),
        damage: 25,
        energy: -20,
        dps: 6.25,
        duration: 4000,
    }
}

#[test]
fn move_decodes_lowercase_keys() {
    let m: Move = serde_json::from_value(json!({
        "id": 13,
        "name": "Wrap",
        "type": "Normal",
        "damage": 25,
        "energy": -20,
        "dps": 6.25,
        "duration": 4000
    }))
    .unwrap();
    assert_eq!(m, wrap());
}

#[test]
fn move_accepts_capitalized_keys() {
    let m: Move = serde_json::from_value(json!({
        "ID": 13,
        "Name": "Wrap",
        "Type": "Normal",
        "Damage": 25,
        "Energy": -20,
        "Dps": 6.25,
        "Duration": 4000
    }))
    .unwrap();
    assert_eq!(m, wrap());
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn entity_serializes_with_source_labels() {
    let e: Entity = serde_json::from_value(bulbasaur_json()).unwrap();
    let value = serde_json::to_value(&e).unwrap();
    assert_eq!(value["Type I"], json!(["Grass"]));
    assert_eq!(value["Fast Attack(s)"], json!(["Tackle", "Vine Whip"]));
    assert_eq!(value["Next Evolution Requirements"]["Amount"], json!(25));
    assert_eq!(
        value["Candy"],
        json!({"Name": "Bulbasaur Candy", "FamilyID": 1})
    );
}

#[test]
fn move_serializes_with_lowercase_keys() {
    let value = serde_json::to_value(wrap()).unwrap();
    assert_eq!(value["name"], json!("Wrap"));
    assert_eq!(value["type"], json!("Normal"));
    assert_eq!(value["dps"], json!(6.25));
}
