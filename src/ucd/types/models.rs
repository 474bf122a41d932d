//! Core data structures flowing through the generator.
//!
//! - [`Record`]: one parsed line of the character database
//! - [`CategoryTable`]: code points grouped by general category
//! - [`CaseMap`] / [`CaseMappings`]: directional simple case relations
//! - [`Tables`]: everything the emitter needs, produced by the aggregator

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// A Unicode scalar value as stored in the database.
pub type CodePoint = u32;

/// One row of `UnicodeData.txt` with the fields this generator cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub code_point: CodePoint,
    /// General category label (`Lu`, `Nd`, ...), kept verbatim.
    pub category: String,
    /// Simple uppercase mapping (field 12).
    pub upper_mapping: Option<CodePoint>,
    /// Simple lowercase mapping (field 13).
    pub lower_mapping: Option<CodePoint>,
    /// Simple titlecase mapping (field 14).
    pub title_mapping: Option<CodePoint>,
}

/// Category label to the code points carrying that label.
///
/// Labels iterate in ascending lexicographic order. The point lists are kept
/// in arrival order; the emitter is responsible for sorting them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: BTreeMap<String, Vec<CodePoint>>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, code_point: CodePoint) {
        match self.categories.get_mut(category) {
            Some(points) => points.push(code_point),
            None => {
                self.categories.insert(category.to_owned(), vec![code_point]);
            }
        }
    }

    /// Code points recorded under `category`, in arrival order.
    pub fn get(&self, category: &str) -> Option<&[CodePoint]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Iterates `(label, code points)` in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CodePoint])> {
        self.categories
            .iter()
            .map(|(label, points)| (label.as_str(), points.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// One directional case relation, keyed by source code point.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaseMap {
    pairs: BTreeMap<CodePoint, CodePoint>,
}

impl CaseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `from -> to`. An existing key is left untouched and `false` is returned.
    pub fn insert(&mut self, from: CodePoint, to: CodePoint) -> bool {
        match self.pairs.entry(from) {
            Entry::Vacant(slot) => {
                slot.insert(to);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, from: CodePoint) -> Option<CodePoint> {
        self.pairs.get(&from).copied()
    }

    pub fn contains(&self, from: CodePoint) -> bool {
        self.pairs.contains_key(&from)
    }

    /// Iterates `(key, value)` pairs by ascending key.
    pub fn iter(&self) -> impl Iterator<Item = (CodePoint, CodePoint)> + '_ {
        self.pairs.iter().map(|(&from, &to)| (from, to))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The three simple case relations derived from the database.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaseMappings {
    /// Keyed by a code point that has an uppercase mapping; value is that mapping.
    pub lower_to_upper: CaseMap,
    /// Keyed by a code point that has a lowercase mapping; value is that mapping.
    pub upper_to_lower: CaseMap,
    /// Keyed by a code point that has a titlecase mapping; value is that mapping.
    pub title: CaseMap,
}

/// Aggregated output of a full database pass, ready for emission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tables {
    pub categories: CategoryTable,
    pub case_mappings: CaseMappings,
}
