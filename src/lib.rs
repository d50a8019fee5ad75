//! Dexview: catalog viewer and query engine for the PokeAPI creature database
//!
//! A session loads the full entry list and the 18 per-type groups once, then
//! answers every view from memory.
//!
//! # Architecture
//!
//! - **Catalog**: fetches entries and type groups; builds the type index and
//!   the navigation index
//! - **Query Engine**: prefix search, all-of type filter, stable sort
//! - **Paginator**: fixed-size pages with a clamped active page
//! - **Views**: list (master-detail), gallery (paged grid), detail (prev/next)
//!
//! # Example Usage
//!
//! ```
//! use dexview::models::{CatalogPayload, Entry, SortMode};
//! use dexview::{Catalog, QueryEngine, QueryState};
//!
//! let catalog = Catalog::new(CatalogPayload {
//!     count: 2,
//!     results: vec![
//!         Entry::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/"),
//!         Entry::new("raichu", "https://pokeapi.co/api/v2/pokemon/26/"),
//!     ],
//! });
//!
//! let engine = QueryEngine::new(catalog.entries(), catalog.type_index());
//! let results = engine.run(&QueryState::new("pika", SortMode::DexAsc));
//! assert_eq!(results.len(), 1);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod formatter;
pub mod identifier;
pub mod models;
pub mod navigator;
pub mod output;
pub mod paginate;
pub mod query;
pub mod registry;
pub mod server;
pub mod sprites;
pub mod type_index;
pub mod views;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogSource, PokeApiClient};
pub use config::CatalogConfig;
pub use models::{Direction, Entry, EntryDetail, SortMode, TypeGroup};
pub use navigator::Navigator;
pub use query::{QueryEngine, QueryState};
pub use registry::PokemonType;
pub use type_index::TypeIndex;
