//! Plain-text record formatting.
//!
//! Each record kind lists its fields explicitly, in declaration order, so the
//! output layout is fixed no matter how the structs evolve. A record renders
//! as one `Label: value` line per field; lists are comma-separated and absent
//! optional values render as an empty value.

use pokedex_model::{Candy, Category, Entity, EvolutionRef, EvolutionRequirement, Move};

/// A record that can be dumped as labelled lines.
pub trait Render {
    /// `(label, value)` for every field, in a stable order.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// One `Label: value` line per field.
pub fn render_record<R: Render + ?Sized>(record: &R) -> String {
    record
        .fields()
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

/// Records separated by a blank line.
pub fn render_records<'a, R, I>(records: I) -> String
where
    R: Render + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .map(|r| render_record(r))
        .collect::<Vec<_>>()
        .join("\n")
}

fn list(values: &[String]) -> String {
    values.join(", ")
}

fn evolution_refs(refs: &[EvolutionRef]) -> String {
    refs.iter()
        .map(|r| format!("{} {}", r.number, r.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn candy(candy: Option<&Candy>) -> String {
    match candy {
        Some(c) => format!("Name {}, FamilyID {}", c.name, c.family_id),
        None => String::new(),
    }
}

fn requirement(req: Option<&EvolutionRequirement>) -> String {
    match req {
        Some(req) => format!(
            "Amount {}, Family {}, Name {}",
            req.amount, req.family, req.name
        ),
        None => String::new(),
    }
}

impl Render for Category {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Effective against", list(&self.effective_against)),
            ("Weak against", list(&self.weak_against)),
        ]
    }
}

impl Render for Entity {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Number", self.number.clone()),
            ("Name", self.name.clone()),
            ("Classification", self.classification.clone()),
            ("Type I", list(&self.type_i)),
            ("Type II", list(&self.type_ii)),
            ("Weaknesses", list(&self.weaknesses)),
            ("Fast Attack(s)", list(&self.fast_attacks)),
            ("Special Attack(s)", list(&self.special_attacks)),
            ("Weight", self.weight.clone()),
            ("Height", self.height.clone()),
            ("Candy", candy(self.candy.as_ref())),
            (
                "Next Evolution Requirements",
                requirement(self.next_evolution_requirements.as_ref()),
            ),
            ("Next evolution(s)", evolution_refs(&self.next_evolutions)),
            ("Previous evolution(s)", evolution_refs(&self.previous_evolutions)),
            ("BaseAttack", self.base_attack.to_string()),
            ("BaseDefense", self.base_defense.to_string()),
            ("BaseStamina", self.base_stamina.to_string()),
            ("CaptureRate", self.capture_rate.to_string()),
            ("FleeRate", self.flee_rate.to_string()),
            ("BuddyDistanceNeeded", self.buddy_distance_needed.to_string()),
        ]
    }
}

impl Render for Move {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Type", self.category.clone()),
            ("Damage", self.damage.to_string()),
            ("Energy", self.energy.to_string()),
            ("Dps", self.dps.to_string()),
            ("Duration", self.duration.to_string()),
        ]
    }
}
