//! Per-entry category membership
//!
//! The API groups entries by category (`type → members`). The query engine
//! needs the inverse (`entry → types`), built once after the category
//! fetches settle and read-only afterwards.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::{Entry, TypeGroup};
use crate::registry::PokemonType;

/// Inverted category index
///
/// A pending index (category data not loaded yet) lets every entry through
/// any type constraint, exactly as if no type had been selected.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    memberships: Option<HashMap<String, BTreeSet<PokemonType>>>,
}

impl TypeIndex {
    /// Index for a session whose category data hasn't arrived
    pub fn pending() -> Self {
        Self { memberships: None }
    }

    /// Invert `groups` for the entries in `entries`
    ///
    /// Members that aren't in the entry list are ignored, as are groups whose
    /// name isn't in the registry. Fewer than 18 groups is fine.
    pub fn build(groups: &[TypeGroup], entries: &[Entry]) -> Self {
        let known: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        let mut memberships: HashMap<String, BTreeSet<PokemonType>> = HashMap::new();

        for group in groups {
            let Some(kind) = PokemonType::from_name(&group.type_name) else {
                log::warn!("Ignoring type group '{}' (not in registry)", group.type_name);
                continue;
            };

            for member in &group.members {
                if known.contains(member.as_str()) {
                    memberships.entry(member.clone()).or_default().insert(kind);
                }
            }
        }

        log::info!(
            "Built type index from {} groups: {} of {} entries typed",
            groups.len(),
            memberships.len(),
            entries.len()
        );

        Self {
            memberships: Some(memberships),
        }
    }

    /// Whether category data has been indexed
    pub fn is_ready(&self) -> bool {
        self.memberships.is_some()
    }

    /// Categories recorded for an entry (empty if none, or if pending)
    pub fn types_of(&self, name: &str) -> BTreeSet<PokemonType> {
        self.memberships
            .as_ref()
            .and_then(|m| m.get(name))
            .cloned()
            .unwrap_or_default()
    }

    /// True iff `name` belongs to every type in `selected`
    ///
    /// Always true when `selected` is empty or the index is pending. An entry
    /// with no recorded types fails any non-empty selection.
    pub fn satisfies(&self, name: &str, selected: &BTreeSet<PokemonType>) -> bool {
        if selected.is_empty() {
            return true;
        }

        match &self.memberships {
            None => true,
            Some(memberships) => match memberships.get(name) {
                Some(types) => selected.is_subset(types),
                None => false,
            },
        }
    }
}
