use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

use crate::core::filters::{validate_entry, IncompleteEntry};
use crate::models::{CatalogEntry, Category, Destination, Season};
use crate::services::destinations::builtin_destinations;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    IncompleteEntry(#[from] IncompleteEntry),
}

/// Cost range across the catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Catalog composition summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_destinations: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub avg_cost_by_category: BTreeMap<Category, f64>,
    pub cost_range: Option<CostRange>,
}

/// Browse criteria for [`Catalog::explore`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExploreFilter {
    /// Empty matches every category
    pub categories: BTreeSet<Category>,
    /// Inclusive upper bound on typical cost
    pub max_cost: Option<f64>,
    /// Keep destinations listing this among their best seasons
    pub season: Option<Season>,
}

impl ExploreFilter {
    pub fn matches(&self, destination: &Destination) -> bool {
        (self.categories.is_empty() || self.categories.contains(&destination.category))
            && self.max_cost.map_or(true, |max| destination.typical_cost <= max)
            && self
                .season
                .map_or(true, |season| destination.best_seasons.contains(&season))
    }
}

/// Read-only destination catalog
///
/// Loaded once at startup and shared behind an `Arc`. Entries that fail
/// validation are skipped and counted, never scored.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
    excluded: usize,
}

impl Catalog {
    /// Catalog of the built-in destinations
    pub fn builtin() -> Self {
        Self::from_destinations(builtin_destinations())
    }

    pub fn from_destinations(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            excluded: 0,
        }
    }

    /// Build a catalog from raw records, skipping incomplete ones
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut destinations = Vec::with_capacity(entries.len());
        let mut excluded = 0;

        for entry in entries {
            match validate_entry(entry) {
                Ok(destination) => destinations.push(destination),
                Err(e) => {
                    let err = CatalogError::from(e);
                    tracing::warn!("Skipping catalog entry: {}", err);
                    excluded += 1;
                }
            }
        }

        tracing::info!(
            "Loaded catalog with {} destinations ({} excluded)",
            destinations.len(),
            excluded
        );

        Self {
            destinations,
            excluded,
        }
    }

    /// Parse a JSON array of catalog records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Load a JSON catalog file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Reading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Number of records skipped at load time
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Destinations matching every set criterion, in catalog order
    pub fn explore(&self, filter: &ExploreFilter) -> Vec<&Destination> {
        let found: Vec<&Destination> = self
            .destinations
            .iter()
            .filter(|d| filter.matches(d))
            .collect();

        tracing::debug!(
            "Explore matched {} of {} destinations",
            found.len(),
            self.destinations.len()
        );

        found
    }

    pub fn stats(&self) -> CatalogStats {
        let mut by_category: BTreeMap<Category, usize> = BTreeMap::new();
        let mut cost_by_category: BTreeMap<Category, f64> = BTreeMap::new();

        for destination in &self.destinations {
            *by_category.entry(destination.category).or_insert(0) += 1;
            *cost_by_category.entry(destination.category).or_insert(0.0) +=
                destination.typical_cost;
        }

        let avg_cost_by_category = cost_by_category
            .into_iter()
            .map(|(category, total)| {
                let count = by_category.get(&category).copied().unwrap_or(1);
                (category, total / count as f64)
            })
            .collect();

        let cost_range = if self.destinations.is_empty() {
            None
        } else {
            let costs = self.destinations.iter().map(|d| d.typical_cost);
            let min = costs.clone().fold(f64::INFINITY, f64::min);
            let max = costs.clone().fold(f64::NEG_INFINITY, f64::max);
            let avg = costs.sum::<f64>() / self.destinations.len() as f64;
            Some(CostRange { min, max, avg })
        };

        CatalogStats {
            total_destinations: self.destinations.len(),
            by_category,
            avg_cost_by_category,
            cost_range,
        }
    }
}
