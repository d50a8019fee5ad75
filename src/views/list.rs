use serde::Serialize;

use super::EntrySummary;
use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::models::{Entry, SortMode};
use crate::query::{QueryEngine, QueryState};
use crate::sprites;

/// Identifier shown before any selection is made
const INITIAL_SELECTION: u32 = 1;

/// Master-detail list: every match, plus one selected entry's artwork
#[derive(Debug)]
pub struct ListView<'a> {
    catalog: &'a Catalog,
    state: QueryState,
    results: Vec<&'a Entry>,
    selected_id: u32,
}

impl<'a> ListView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let mut view = Self {
            catalog,
            state: QueryState::default(),
            results: Vec::new(),
            selected_id: INITIAL_SELECTION,
        };
        view.refresh();
        view
    }

    /// Change the search text; selection jumps to the first match
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.refresh();
        self.select_first();
    }

    /// Change the sort mode; selection jumps to the first match
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.state.sort_mode = mode;
        self.refresh();
        self.select_first();
    }

    /// Select an entry by identifier
    pub fn select(&mut self, dex_num: u32) {
        self.selected_id = dex_num;
    }

    pub fn selected_id(&self) -> u32 {
        self.selected_id
    }

    pub fn results(&self) -> &[&'a Entry] {
        &self.results
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Renderable snapshot ("N out of M" plus selection)
    pub fn page(&self, config: &CatalogConfig) -> ListPage {
        ListPage {
            search_text: self.state.search_text.clone(),
            sort_mode: self.state.sort_mode,
            matched: self.results.len(),
            total: self.catalog.count(),
            selected_id: self.selected_id,
            selected_artwork_url: sprites::artwork_url(config, self.selected_id),
            entries: self
                .results
                .iter()
                .map(|e| EntrySummary::new(e, self.catalog, config))
                .collect(),
        }
    }

    fn refresh(&mut self) {
        let engine = QueryEngine::new(self.catalog.entries(), self.catalog.type_index());
        self.results = engine.run(&self.state);
    }

    // An empty result keeps the previous selection on screen
    fn select_first(&mut self) {
        if let Some(first) = self.results.first() {
            self.selected_id = first.dex_num();
        }
    }
}

/// Serializable list view output
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub search_text: String,
    pub sort_mode: SortMode,
    pub matched: usize,
    pub total: usize,
    pub selected_id: u32,
    pub selected_artwork_url: String,
    pub entries: Vec<EntrySummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogPayload;

    fn catalog() -> Catalog {
        let results = ["bulbasaur", "ivysaur", "venusaur", "charmander"]
            .iter()
            .enumerate()
            .map(|(i, name)| Entry::new(*name, format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1)))
            .collect();
        Catalog::new(CatalogPayload { count: 1025, results })
    }

    #[test]
    fn test_initial_state() {
        let catalog = catalog();
        let view = ListView::new(&catalog);
        assert_eq!(view.results().len(), 4);
        assert_eq!(view.selected_id(), 1);

        let page = view.page(&CatalogConfig::default());
        assert_eq!(page.matched, 4);
        assert_eq!(page.total, 1025);
        assert!(page.selected_artwork_url.ends_with("/1.png"));
    }

    #[test]
    fn test_search_selects_first_match() {
        let catalog = catalog();
        let mut view = ListView::new(&catalog);
        view.set_search_text("char");
        assert_eq!(view.results().len(), 1);
        assert_eq!(view.selected_id(), 4);
    }

    #[test]
    fn test_sort_change_selects_first_match() {
        let catalog = catalog();
        let mut view = ListView::new(&catalog);
        view.set_sort_mode(SortMode::DexDesc);
        assert_eq!(view.selected_id(), 4);
        view.set_sort_mode(SortMode::NameAsc);
        assert_eq!(view.selected_id(), 1);
    }

    #[test]
    fn test_empty_result_keeps_selection() {
        let catalog = catalog();
        let mut view = ListView::new(&catalog);
        view.select(3);
        view.set_search_text("zzz");
        assert!(view.results().is_empty());
        assert_eq!(view.selected_id(), 3);
    }
}
