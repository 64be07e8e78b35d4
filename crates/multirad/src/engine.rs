//! Contains QueryEngine, which intersects the kanji of the selected radicals.

use radkdata::{kanjidic::FrequencyTable, radkfile::RadicalEntry};
use std::fmt;

/// Refers to a radical by its position in the loaded table.
/// Two radicals with the same kanji are still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RadicalId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// The matching kanji, most frequent first.
    pub kanji: String,
    pub selected: usize,
    pub found: usize,
}

impl QueryResult {
    pub fn status(&self) -> String {
        let plural = if self.selected == 1 { "" } else { "s" };
        format!(
            "{} radical{plural} selected, {} Kanji found",
            self.selected, self.found
        )
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kanji)
    }
}

#[derive(Debug, Clone)]
pub struct QueryEngine<'a> {
    radicals: &'a [RadicalEntry],
    frequencies: &'a FrequencyTable,
    active: Vec<RadicalId>,
}

impl<'a> QueryEngine<'a> {
    pub fn new(radicals: &'a [RadicalEntry], frequencies: &'a FrequencyTable) -> Self {
        Self {
            radicals,
            frequencies,
            active: vec![],
        }
    }

    pub fn radicals(&self) -> &'a [RadicalEntry] {
        self.radicals
    }

    /// Swaps in a new frequency table, e.g. once it has finished loading.
    pub fn set_frequencies(&mut self, frequencies: &'a FrequencyTable) {
        self.frequencies = frequencies;
    }

    pub fn is_active(&self, id: RadicalId) -> bool {
        self.active.contains(&id)
    }

    /// The selected radicals in the order they were selected.
    pub fn active(&self) -> &[RadicalId] {
        &self.active
    }

    /// Adds the radical to the selection. Returns false if there is no such radical.
    pub fn activate(&mut self, id: RadicalId) -> bool {
        if id.0 >= self.radicals.len() {
            return false;
        }
        self.active.push(id);
        true
    }

    /// Removes the radical from the selection. Returns false if it wasn't selected.
    pub fn deactivate(&mut self, id: RadicalId) -> bool {
        match self.active.iter().position(|&active| active == id) {
            Some(idx) => {
                self.active.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Flips the radical's selection, returning whether it's now selected.
    /// `None` if there is no such radical.
    pub fn toggle(&mut self, id: RadicalId) -> Option<bool> {
        if self.deactivate(id) {
            Some(false)
        } else if self.activate(id) {
            Some(true)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn compute(&self) -> QueryResult {
        let mut sets = self
            .active
            .iter()
            .map(|id| &self.radicals[id.0].members)
            .collect::<Vec<_>>();
        sets.sort_by_key(|members| members.len());

        let kanji = match sets.split_first() {
            Some((smallest, rest)) => {
                let mut found = smallest
                    .iter()
                    .copied()
                    .filter(|kanji| rest.iter().all(|members| members.contains(kanji)))
                    .collect::<Vec<_>>();
                // unranked kanji go last, ties are broken by code point
                found.sort_by_key(|&kanji| {
                    let rank = self.frequencies.rank(kanji);
                    (rank.is_none(), rank, kanji)
                });
                found.into_iter().collect::<String>()
            }
            None => String::new(),
        };

        QueryResult {
            found: kanji.chars().count(),
            kanji,
            selected: self.active.len(),
        }
    }
}
