//! Catalog loading
//!
//! A session loads the entry list once, plus one type group per registry
//! category. All requests are issued together and may resolve in any order.
//! The entry list is required; category groups are best effort.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::CatalogConfig;
use crate::models::{CatalogPayload, Entry, EntryDetail, TypeGroup, TypeGroupPayload};
use crate::navigator::Navigator;
use crate::registry::PokemonType;
use crate::type_index::TypeIndex;

/// Where catalog data comes from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Full entry list in canonical order
    async fn fetch_catalog(&self) -> Result<CatalogPayload>;

    /// Members of one category
    async fn fetch_type_group(&self, kind: PokemonType) -> Result<TypeGroup>;

    /// Detail record for one identifier
    async fn fetch_detail(&self, dex_num: u32) -> Result<EntryDetail>;

    /// Source name (for logging and error messages)
    fn name(&self) -> &str;
}

/// HTTP client for PokeAPI-compatible servers
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
    list_limit: usize,
}

impl PokeApiClient {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        let mut base_url = config.api_base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            base_url,
            list_limit: config.list_limit,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("API error ({}) for {}: {}", status, url, error_text);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_catalog(&self) -> Result<CatalogPayload> {
        let url = format!("{}pokemon", self.base_url);
        let query = [("limit", self.list_limit.to_string()), ("offset", "0".to_string())];
        self.get_json(&url, &query).await
    }

    async fn fetch_type_group(&self, kind: PokemonType) -> Result<TypeGroup> {
        let url = format!("{}type/{}/", self.base_url, kind.id());
        let payload: TypeGroupPayload = self.get_json(&url, &[]).await?;
        Ok(payload.into())
    }

    async fn fetch_detail(&self, dex_num: u32) -> Result<EntryDetail> {
        let url = format!("{}pokemon/{}/", self.base_url, dex_num);
        self.get_json(&url, &[]).await
    }

    fn name(&self) -> &str {
        "pokeapi"
    }
}

/// Session-wide catalog snapshot, read-only once loaded
#[derive(Debug, Clone)]
pub struct Catalog {
    count: usize,
    entries: Vec<Entry>,
    type_index: TypeIndex,
    navigator: Navigator,
}

impl Catalog {
    /// Catalog without category data (type filters pass everything)
    pub fn new(payload: CatalogPayload) -> Self {
        let navigator = Navigator::new(&payload.results);
        Self {
            count: payload.count,
            entries: payload.results,
            type_index: TypeIndex::pending(),
            navigator,
        }
    }

    /// Catalog with an index built from `groups`
    pub fn with_type_groups(payload: CatalogPayload, groups: &[TypeGroup]) -> Self {
        let mut catalog = Self::new(payload);
        catalog.type_index = TypeIndex::build(groups, &catalog.entries);
        catalog
    }

    /// Fetch the entry list and every category group concurrently
    ///
    /// Fails only if the entry list can't be fetched. Category failures are
    /// logged and the index is built from the groups that arrived; if none
    /// arrived, the index stays pending.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        log::info!("Loading catalog from {}", source.name());

        let type_fetches = PokemonType::all().map(|kind| async move {
            (kind, source.fetch_type_group(kind).await)
        });

        let (payload, type_results) =
            futures::join!(source.fetch_catalog(), join_all(type_fetches));

        let payload = payload.with_context(|| format!("Failed to load catalog from {}", source.name()))?;
        log::info!("Fetched {} entries (API count {})", payload.results.len(), payload.count);

        let mut groups = Vec::with_capacity(type_results.len());
        for (kind, result) in type_results {
            match result {
                Ok(group) => groups.push(group),
                Err(e) => log::warn!("Failed to load type '{}': {:#}", kind, e),
            }
        }

        if groups.is_empty() {
            log::warn!("No type data loaded; type filters disabled");
            return Ok(Self::new(payload));
        }

        Ok(Self::with_type_groups(payload, &groups))
    }

    /// Total reported by the API (may exceed `entries().len()`)
    pub fn count(&self) -> usize {
        self.count
    }

    /// Entries in canonical fetch order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn type_index(&self) -> &TypeIndex {
        &self.type_index
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// First entry whose identifier is `dex_num`
    pub fn find_by_id(&self, dex_num: u32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.dex_num() == dex_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_normalizes_base_url() {
        let config = CatalogConfig {
            api_base_url: "http://localhost:9000/api/v2".to_string(),
            ..CatalogConfig::default()
        };
        let client = PokeApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/api/v2/");
    }

    #[test]
    fn test_catalog_without_groups_is_pending() {
        let payload = CatalogPayload {
            count: 1302,
            results: vec![Entry::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/")],
        };
        let catalog = Catalog::new(payload);
        assert_eq!(catalog.count(), 1302);
        assert!(!catalog.type_index().is_ready());
        assert_eq!(catalog.find_by_id(1).map(|e| e.name.as_str()), Some("bulbasaur"));
        assert!(catalog.find_by_id(2).is_none());
    }
}
