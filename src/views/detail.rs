use anyhow::{Context, Result};
use serde::Serialize;

use crate::catalog::{Catalog, CatalogSource};
use crate::config::CatalogConfig;
use crate::models::{Direction, EntryDetail};
use crate::sprites;

/// Single-entry page with prev/next targets in catalog order
#[derive(Debug, Clone)]
pub struct DetailView {
    detail: EntryDetail,
    prev_id: u32,
    next_id: u32,
}

impl DetailView {
    pub fn new(catalog: &Catalog, detail: EntryDetail) -> Self {
        let entries = catalog.entries();
        let navigator = catalog.navigator();
        let prev_id = navigator.neighbor(entries, &detail.name, Direction::Prev);
        let next_id = navigator.neighbor(entries, &detail.name, Direction::Next);

        Self {
            detail,
            prev_id,
            next_id,
        }
    }

    /// Fetch the detail record for `dex_num` and resolve its neighbours
    pub async fn load(source: &dyn CatalogSource, catalog: &Catalog, dex_num: u32) -> Result<Self> {
        let detail = source
            .fetch_detail(dex_num)
            .await
            .with_context(|| format!("Failed to load entry #{}", dex_num))?;
        Ok(Self::new(catalog, detail))
    }

    pub fn detail(&self) -> &EntryDetail {
        &self.detail
    }

    pub fn prev_id(&self) -> u32 {
        self.prev_id
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Renderable snapshot
    pub fn page(&self, config: &CatalogConfig) -> DetailPage {
        let detail = &self.detail;
        DetailPage {
            id: detail.id,
            name: detail.name.clone(),
            base_experience: detail.base_experience,
            weight: detail.weight,
            stats: detail
                .stats
                .iter()
                .map(|s| StatLine {
                    name: s.stat.name.clone(),
                    value: s.base_stat,
                })
                .collect(),
            types: detail.types.iter().map(|t| t.kind.name.clone()).collect(),
            type_icon_urls: detail
                .types
                .iter()
                .map(|t| sprites::type_icon_url(config, &t.kind.name))
                .collect(),
            artwork_url: sprites::artwork_url(config, detail.id),
            shiny_url: sprites::shiny_url(config, detail.id),
            prev_id: self.prev_id,
            next_id: self.next_id,
        }
    }
}

/// One base stat
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatLine {
    pub name: String,
    pub value: u32,
}

/// Serializable detail output
#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub id: u32,
    pub name: String,
    pub base_experience: Option<u32>,
    pub weight: u32,
    pub stats: Vec<StatLine>,
    pub types: Vec<String>,
    pub type_icon_urls: Vec<String>,
    pub artwork_url: String,
    pub shiny_url: String,
    pub prev_id: u32,
    pub next_id: u32,
}
