//! Prev/next navigation over the canonical catalog order
//!
//! Detail pages step through the catalog in fetch order regardless of any
//! search, sort or type selection active elsewhere. Positions are looked up
//! through a name index built once per session.

use std::collections::HashMap;

use crate::models::{Direction, Entry};

/// Identifier returned when the current entry isn't in the catalog
pub const FALLBACK_ID: u32 = 1;

/// Name → position index over the unfiltered entry list
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    positions: HashMap<String, usize>,
    len: usize,
}

impl Navigator {
    pub fn new(entries: &[Entry]) -> Self {
        let mut positions = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            // First occurrence wins, matching a front-to-back scan
            positions.entry(entry.name.clone()).or_insert(i);
        }

        Self {
            positions,
            len: entries.len(),
        }
    }

    /// Position of `name` in fetch order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Neighbouring entry, clamped to the first/last entry
    ///
    /// `None` if `current` isn't indexed or `entries` differs from the list
    /// this navigator was built from.
    pub fn neighbor_entry<'a>(
        &self,
        entries: &'a [Entry],
        current: &str,
        direction: Direction,
    ) -> Option<&'a Entry> {
        if entries.len() != self.len {
            log::warn!("Navigator built for {} entries, given {}", self.len, entries.len());
            return None;
        }

        let index = self.position(current)?;
        let target = match direction {
            Direction::Prev => index.saturating_sub(1),
            Direction::Next => (index + 1).min(self.len - 1),
        };
        entries.get(target)
    }

    /// Identifier of the neighbouring entry, or [`FALLBACK_ID`] if `current` is unknown
    pub fn neighbor(&self, entries: &[Entry], current: &str, direction: Direction) -> u32 {
        match self.neighbor_entry(entries, current, direction) {
            Some(entry) => entry.dex_num(),
            None => {
                log::debug!("'{}' not in catalog, navigating to #{}", current, FALLBACK_ID);
                FALLBACK_ID
            }
        }
    }
}
