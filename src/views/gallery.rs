use serde::Serialize;

use super::EntrySummary;
use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::models::{Entry, SortMode};
use crate::paginate::{self, PageCursor};
use crate::query::{QueryEngine, QueryState};
use crate::registry::PokemonType;

/// Paginated, filterable grid
///
/// The page cursor is re-clamped after every query change, so the active
/// page always exists (or is 0 when nothing matches).
#[derive(Debug)]
pub struct GalleryView<'a> {
    catalog: &'a Catalog,
    state: QueryState,
    page_size: usize,
    results: Vec<&'a Entry>,
    cursor: PageCursor,
}

impl<'a> GalleryView<'a> {
    pub fn new(catalog: &'a Catalog, page_size: usize) -> Self {
        let mut view = Self {
            catalog,
            state: QueryState::default(),
            page_size: page_size.max(1),
            results: Vec::new(),
            cursor: PageCursor::default(),
        };
        view.refresh();
        view
    }

    /// Replace the whole query state at once
    pub fn set_state(&mut self, state: QueryState) {
        self.state = state;
        self.refresh();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.refresh();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.state.sort_mode = mode;
        self.refresh();
    }

    pub fn set_selected_types(&mut self, types: impl IntoIterator<Item = PokemonType>) {
        self.state.selected_types = types.into_iter().collect();
        self.refresh();
    }

    /// Add the type if absent, remove it if present
    pub fn toggle_type(&mut self, kind: PokemonType) {
        if !self.state.selected_types.remove(&kind) {
            self.state.selected_types.insert(kind);
        }
        self.refresh();
    }

    /// Clear every selected type
    pub fn reset_types(&mut self) {
        self.state.selected_types.clear();
        self.refresh();
    }

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    pub fn retreat(&mut self) {
        self.cursor.retreat();
    }

    /// Jump to a page, clamped to the last one
    pub fn go_to(&mut self, page: usize) {
        self.cursor.go_to(page);
    }

    pub fn active_page(&self) -> usize {
        self.cursor.active()
    }

    pub fn page_count(&self) -> usize {
        self.cursor.page_count()
    }

    /// Paging controls are only shown for more than one page
    pub fn has_paging_controls(&self) -> bool {
        self.page_count() > 1
    }

    pub fn results(&self) -> &[&'a Entry] {
        &self.results
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Entries on the active page
    pub fn current_page(&self) -> &[&'a Entry] {
        paginate::paginate(&self.results, self.page_size)
            .get(self.cursor.active())
            .copied()
            .unwrap_or(&[])
    }

    /// Renderable snapshot of the active page
    pub fn page(&self, config: &CatalogConfig) -> GalleryPage {
        GalleryPage {
            search_text: self.state.search_text.clone(),
            sort_mode: self.state.sort_mode,
            selected_types: self.state.selected_types.iter().copied().collect(),
            matched: self.results.len(),
            page: self.cursor.active(),
            page_count: self.cursor.page_count(),
            page_size: self.page_size,
            can_retreat: self.cursor.can_retreat(),
            can_advance: self.cursor.can_advance(),
            entries: self
                .current_page()
                .iter()
                .map(|e| EntrySummary::new(e, self.catalog, config))
                .collect(),
        }
    }

    fn refresh(&mut self) {
        let engine = QueryEngine::new(self.catalog.entries(), self.catalog.type_index());
        self.results = engine.run(&self.state);
        self.cursor
            .set_page_count(paginate::page_count(self.results.len(), self.page_size));
    }
}

/// Serializable gallery output
#[derive(Debug, Clone, Serialize)]
pub struct GalleryPage {
    pub search_text: String,
    pub sort_mode: SortMode,
    pub selected_types: Vec<PokemonType>,
    pub matched: usize,
    /// Zero-based active page
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub entries: Vec<EntrySummary>,
}
