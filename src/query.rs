//! Query engine over the in-memory catalog
//!
//! A query is a prefix search on name or identifier, an optional
//! all-of-these-types constraint, and a sort mode. Every operation here is
//! total: malformed data degrades (sentinel ids, pending type index) instead
//! of failing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{Entry, SortMode};
use crate::registry::PokemonType;
use crate::type_index::TypeIndex;

/// User-controlled query inputs owned by a single view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Name or identifier prefix (empty = match everything)
    pub search_text: String,
    /// Result ordering
    pub sort_mode: SortMode,
    /// Types an entry must all belong to (empty = no type constraint)
    pub selected_types: BTreeSet<PokemonType>,
}

impl QueryState {
    pub fn new(search_text: impl Into<String>, sort_mode: SortMode) -> Self {
        Self {
            search_text: search_text.into(),
            sort_mode,
            selected_types: BTreeSet::new(),
        }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = PokemonType>) -> Self {
        self.selected_types = types.into_iter().collect();
        self
    }
}

/// Name/identifier prefix test
///
/// Names compare case-insensitively; the identifier compares against its
/// display label, so "15" hits 15, 150-159 and 1500-1599.
pub fn matches_search(entry: &Entry, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }

    entry.name.to_lowercase().starts_with(&search_text.to_lowercase())
        || entry.dex_label().starts_with(search_text)
}

/// Full predicate: search test AND type test
pub fn matches(entry: &Entry, state: &QueryState, index: &TypeIndex) -> bool {
    matches_search(entry, &state.search_text) && index.satisfies(&entry.name, &state.selected_types)
}

/// Comparator for one sort mode
///
/// Equal identifiers compare `Equal`, so a stable sort keeps fetch order.
pub fn compare(a: &Entry, b: &Entry, mode: SortMode) -> Ordering {
    compare_keyed(a.dex_num(), a, b.dex_num(), b, mode)
}

fn compare_keyed(a_id: u32, a: &Entry, b_id: u32, b: &Entry, mode: SortMode) -> Ordering {
    match mode {
        SortMode::DexAsc => a_id.cmp(&b_id),
        SortMode::DexDesc => b_id.cmp(&a_id),
        SortMode::NameAsc => collate(&a.name, &b.name),
        SortMode::NameDesc => collate(&b.name, &a.name),
    }
}

/// Case-insensitive name ordering, falling back to code points on ties
fn collate(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// Stable sort of a result set in place
pub fn sort_entries(entries: &mut Vec<&Entry>, mode: SortMode) {
    let mut keyed: Vec<(u32, &Entry)> = entries.iter().map(|e| (e.dex_num(), *e)).collect();
    keyed.sort_by(|(a_id, a), (b_id, b)| compare_keyed(*a_id, a, *b_id, b, mode));
    *entries = keyed.into_iter().map(|(_, e)| e).collect();
}

/// Runs queries against a catalog snapshot
pub struct QueryEngine<'a> {
    entries: &'a [Entry],
    index: &'a TypeIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(entries: &'a [Entry], index: &'a TypeIndex) -> Self {
        Self { entries, index }
    }

    /// Filter then sort; output borrows from the catalog in result order
    pub fn run(&self, state: &QueryState) -> Vec<&'a Entry> {
        log::debug!("Executing query: {:?}", state);

        let mut results: Vec<&'a Entry> = self
            .entries
            .iter()
            .filter(|e| matches(e, state, self.index))
            .collect();

        sort_entries(&mut results, state.sort_mode);

        log::debug!("Query matched {} of {} entries", results.len(), self.entries.len());
        results
    }

    /// Size of the unfiltered catalog
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}
