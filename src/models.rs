//! Core data models for Dexview
//!
//! These structures mirror the PokeAPI payloads the catalog is built from,
//! plus the small enums the query engine is driven by.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::identifier;

/// A catalog entry as returned by the listing endpoint
///
/// The numeric identifier is not stored; it is parsed on demand from `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Entry name (e.g., "pikachu")
    pub name: String,
    /// Resource locator (e.g., "https://pokeapi.co/api/v2/pokemon/25/")
    #[serde(rename = "url")]
    pub resource_url: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, resource_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_url: resource_url.into(),
        }
    }

    /// Numeric identifier extracted from the resource locator (0 if malformed)
    pub fn dex_num(&self) -> u32 {
        identifier::extract_id(&self.resource_url)
    }

    /// Display label for the identifier ("0000" if malformed)
    pub fn dex_label(&self) -> String {
        identifier::dex_label(&self.resource_url)
    }
}

/// Payload of `GET /pokemon?limit=..&offset=0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPayload {
    /// Total number of entries the API knows about
    pub count: usize,
    /// Entries in canonical fetch order
    pub results: Vec<Entry>,
}

/// Named API reference (`{ "name": ..., "url": ... }`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One member slot inside a type group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMemberSlot {
    pub pokemon: NamedRef,
}

/// Payload of `GET /type/{id}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeGroupPayload {
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<TypeMemberSlot>,
}

/// A category together with the names of the entries belonging to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGroup {
    pub type_name: String,
    pub members: Vec<String>,
}

impl From<TypeGroupPayload> for TypeGroup {
    fn from(payload: TypeGroupPayload) -> Self {
        Self {
            type_name: payload.name,
            members: payload.pokemon.into_iter().map(|slot| slot.pokemon.name).collect(),
        }
    }
}

/// One base stat line of a detail payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedRef,
}

/// One type slot of a detail payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

/// Payload of `GET /pokemon/{id}/` (only the fields the detail view renders)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDetail {
    pub id: u32,
    pub name: String,
    /// Absent for some alternate forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// Ordering applied to query results
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SortMode {
    /// Identifier ascending
    #[default]
    DexAsc,
    /// Identifier descending
    DexDesc,
    /// Name A-Z
    NameAsc,
    /// Name Z-A
    NameDesc,
}

/// Step direction for prev/next navigation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Prev,
    Next,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_url_field() {
        let entry: Entry = serde_json::from_str(
            r#"{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"}"#,
        )
        .unwrap();
        assert_eq!(entry.name, "bulbasaur");
        assert_eq!(entry.dex_num(), 1);
        assert_eq!(entry.dex_label(), "1");
    }

    #[test]
    fn test_type_group_from_payload() {
        let payload: TypeGroupPayload = serde_json::from_str(
            r#"{"name":"fire","pokemon":[{"pokemon":{"name":"charmander","url":"x"},"slot":1}]}"#,
        )
        .unwrap();
        let group = TypeGroup::from(payload);
        assert_eq!(group.type_name, "fire");
        assert_eq!(group.members, vec!["charmander".to_string()]);
    }

    #[test]
    fn test_sort_mode_names() {
        assert_eq!("dex-asc".parse::<SortMode>().unwrap(), SortMode::DexAsc);
        assert_eq!("NAME-DESC".parse::<SortMode>().unwrap(), SortMode::NameDesc);
        assert_eq!(SortMode::NameAsc.to_string(), "name-asc");
        assert_eq!(SortMode::default(), SortMode::DexAsc);
        assert!("dex".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_detail_tolerates_missing_base_experience() {
        let detail: EntryDetail = serde_json::from_str(
            r#"{"id":10001,"name":"deoxys-attack","weight":608,"stats":[],"types":[]}"#,
        )
        .unwrap();
        assert_eq!(detail.base_experience, None);
        assert_eq!(detail.weight, 608);
    }
}
