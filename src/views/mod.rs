// View models for the three catalog views
mod detail;
mod gallery;
mod list;

pub use detail::{DetailPage, DetailView, StatLine};
pub use gallery::{GalleryPage, GalleryView};
pub use list::{ListPage, ListView};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::models::Entry;
use crate::registry::PokemonType;
use crate::sprites;

/// One entry as handed to a renderer
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntrySummary {
    /// Numeric identifier (0 if the locator was malformed)
    pub id: u32,
    /// Identifier as displayed ("0000" if malformed)
    pub label: String,
    pub name: String,
    pub artwork_url: String,
    /// Type badges (empty until type data is loaded)
    pub types: Vec<PokemonType>,
}

impl EntrySummary {
    pub fn new(entry: &Entry, catalog: &Catalog, config: &CatalogConfig) -> Self {
        let id = entry.dex_num();
        Self {
            id,
            label: entry.dex_label(),
            name: entry.name.clone(),
            artwork_url: sprites::artwork_url(config, id),
            types: catalog.type_index().types_of(&entry.name).into_iter().collect(),
        }
    }
}
