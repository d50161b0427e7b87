//! Loaded collections and category visibility

use serde::Serialize;

use super::selection::CategorySelection;
use crate::models::{BoundaryKind, BoundaryPolygon, Category, PointRecord};

/// Everything the loader has produced so far. Any part may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collections {
    pub lakes: Vec<PointRecord>,
    pub hotels: Vec<PointRecord>,
    pub companies: Vec<PointRecord>,
    pub outer_boundary: Option<BoundaryPolygon>,
    pub inner_boundary: Option<BoundaryPolygon>,
}

impl Collections {
    #[must_use]
    pub fn records(&self, category: Category) -> &[PointRecord] {
        match category {
            Category::Lake => &self.lakes,
            Category::Hotel => &self.hotels,
            Category::Company => &self.companies,
        }
    }

    pub fn set_records(&mut self, category: Category, records: Vec<PointRecord>) {
        match category {
            Category::Lake => self.lakes = records,
            Category::Hotel => self.hotels = records,
            Category::Company => self.companies = records,
        }
    }

    #[must_use]
    pub fn boundary(&self, kind: BoundaryKind) -> Option<&BoundaryPolygon> {
        match kind {
            BoundaryKind::Outer => self.outer_boundary.as_ref(),
            BoundaryKind::Inner => self.inner_boundary.as_ref(),
        }
    }

    pub fn set_boundary(&mut self, kind: BoundaryKind, boundary: Option<BoundaryPolygon>) {
        match kind {
            BoundaryKind::Outer => self.outer_boundary = boundary,
            BoundaryKind::Inner => self.inner_boundary = boundary,
        }
    }

    /// Loaded boundaries, outer first so the inner one draws on top
    pub fn boundaries(&self) -> impl Iterator<Item = &BoundaryPolygon> {
        self.outer_boundary.iter().chain(self.inner_boundary.iter())
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.lakes.len() + self.hotels.len() + self.companies.len()
    }
}

/// Borrowed view of the categories that pass the current filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleRecords<'a> {
    groups: Vec<(Category, &'a [PointRecord])>,
}

impl<'a> VisibleRecords<'a> {
    /// Visible groups in display order. Empty collections are skipped.
    #[must_use]
    pub fn groups(&self) -> &[(Category, &'a [PointRecord])] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PointRecord> + '_ {
        self.groups.iter().flat_map(|&(_, records)| records.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.groups
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, records)| records.len())
            .sum()
    }
}

/// Select the whole collection of every category the filter shows
#[must_use]
pub fn visible_records(collections: &Collections, selection: CategorySelection) -> VisibleRecords<'_> {
    let groups = Category::ALL
        .into_iter()
        .filter(|&category| selection.shows(category))
        .map(|category| (category, collections.records(category)))
        .filter(|(_, records)| !records.is_empty())
        .collect();
    VisibleRecords { groups }
}
