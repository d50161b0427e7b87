//! Category filter state
//!
//! The selection is an explicit value owned by whoever handles user input and
//! handed to the engine on every render. There is no ambient global.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LakeMapError;
use crate::models::Category;

/// The active category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelection {
    All,
    Lakes,
    Hotels,
    Companies,
}

impl CategorySelection {
    /// Visibility predicate for one record category
    #[must_use]
    pub fn shows(self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Lakes => category == Category::Lake,
            CategorySelection::Hotels => category == Category::Hotel,
            CategorySelection::Companies => category == Category::Company,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategorySelection::All => "all",
            CategorySelection::Lakes => "lakes",
            CategorySelection::Hotels => "hotels",
            CategorySelection::Companies => "companies",
        }
    }

    /// Button caption, as shown in the filter bar
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CategorySelection::All => "Show All",
            CategorySelection::Lakes => "Show Lakes",
            CategorySelection::Hotels => "Show Hotels",
            CategorySelection::Companies => "Show Companies",
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorySelection {
    type Err = LakeMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategorySelection::All),
            "lakes" => Ok(CategorySelection::Lakes),
            "hotels" => Ok(CategorySelection::Hotels),
            "companies" => Ok(CategorySelection::Companies),
            other => Err(LakeMapError::validation(format!(
                "Unknown category '{other}'. Must be one of: all, lakes, hotels, companies"
            ))),
        }
    }
}

/// Which filter buttons exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySet {
    /// All, lakes, hotels and companies; starts on all
    #[default]
    Full,
    /// Lakes and hotels only; starts on lakes
    Reduced,
}

impl CategorySet {
    #[must_use]
    pub fn choices(self) -> &'static [CategorySelection] {
        match self {
            CategorySet::Full => &[
                CategorySelection::All,
                CategorySelection::Lakes,
                CategorySelection::Hotels,
                CategorySelection::Companies,
            ],
            CategorySet::Reduced => &[CategorySelection::Lakes, CategorySelection::Hotels],
        }
    }

    #[must_use]
    pub fn initial(self) -> CategorySelection {
        match self {
            CategorySet::Full => CategorySelection::All,
            CategorySet::Reduced => CategorySelection::Lakes,
        }
    }

    #[must_use]
    pub fn offers(self, selection: CategorySelection) -> bool {
        self.choices().contains(&selection)
    }
}

/// Current filter plus the set of filters it may move between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    set: CategorySet,
    current: CategorySelection,
}

impl SelectionState {
    #[must_use]
    pub fn new(set: CategorySet) -> Self {
        Self {
            set,
            current: set.initial(),
        }
    }

    #[must_use]
    pub fn current(&self) -> CategorySelection {
        self.current
    }

    /// Handle a button press. Any offered category is reachable from any
    /// state; a category outside the set leaves the state untouched.
    pub fn select(&mut self, selection: CategorySelection) -> Result<CategorySelection, LakeMapError> {
        if !self.set.offers(selection) {
            return Err(LakeMapError::validation(format!(
                "Category '{selection}' is not available in this view"
            )));
        }
        self.current = selection;
        Ok(self.current)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(CategorySet::default())
    }
}
