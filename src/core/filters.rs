use std::collections::BTreeSet;
use thiserror::Error;

use crate::models::{CatalogEntry, Destination, Dimension, Interest, MonthlyTable};

/// A catalog record lacking a field scoring depends on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Incomplete catalog entry {id}: missing or invalid {field}")]
pub struct IncompleteEntry {
    pub id: String,
    pub field: &'static str,
}

/// Turn a raw catalog record into a [`Destination`]
///
/// This is the data-quality stage: records with missing names, costs,
/// monthly tables or dimension vectors are rejected rather than scored
/// with invented values.
pub fn validate_entry(entry: CatalogEntry) -> Result<Destination, IncompleteEntry> {
    let id = match entry.id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            return Err(IncompleteEntry {
                id: "<unknown>".to_string(),
                field: "id",
            })
        }
    };
    let missing = |field: &'static str| IncompleteEntry {
        id: id.clone(),
        field,
    };

    let name = entry
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| missing("name"))?;
    let category = entry.category.ok_or_else(|| missing("category"))?;
    let typical_cost = entry
        .typical_cost
        .filter(|c| c.is_finite() && *c >= 0.0)
        .ok_or_else(|| missing("typical_cost"))?;
    let weather_by_month = entry
        .weather_by_month
        .as_deref()
        .and_then(monthly_table)
        .ok_or_else(|| missing("weather_by_month"))?;
    let crowd_by_month = entry
        .crowd_by_month
        .as_deref()
        .and_then(monthly_table)
        .ok_or_else(|| missing("crowd_by_month"))?;
    let dna = entry
        .dna
        .ok_or_else(|| missing("dna"))?
        .complete()
        .map_err(|axis| missing(dna_field(axis)))?;
    if !dna.is_normalized() {
        return Err(missing("dna"));
    }

    Ok(Destination {
        id: id.clone(),
        name,
        country: entry.country.unwrap_or_default(),
        category,
        description: entry.description,
        highlights: entry.highlights,
        typical_cost,
        best_seasons: entry.best_seasons,
        weather_by_month,
        crowd_by_month,
        interests: entry.interests,
        dna,
    })
}

fn dna_field(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Adventure => "dna.adventure",
        Dimension::Comfort => "dna.comfort",
        Dimension::Culture => "dna.culture",
        Dimension::Luxury => "dna.luxury",
        Dimension::Nature => "dna.nature",
        Dimension::Urban => "dna.urban",
        Dimension::Social => "dna.social",
    }
}

/// Exactly twelve finite values in `[0, 1]`
fn monthly_table(values: &[f64]) -> Option<MonthlyTable> {
    if values
        .iter()
        .any(|v| !v.is_finite() || !(0.0..=1.0).contains(v))
    {
        return None;
    }
    MonthlyTable::try_from(values).ok()
}

/// Check that an in-memory destination can be scored
///
/// Destinations built directly in code bypass [`validate_entry`]; this
/// guards the ranker against NaN costs or out-of-range tables.
#[inline]
pub fn is_rankable(destination: &Destination) -> bool {
    !destination.id.is_empty()
        && destination.typical_cost.is_finite()
        && destination.typical_cost >= 0.0
        && destination.dna.is_normalized()
        && destination
            .weather_by_month
            .iter()
            .chain(destination.crowd_by_month.iter())
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
}

/// Interests the user selected that the destination offers
#[inline]
pub fn shared_interests(
    selected: &BTreeSet<Interest>,
    destination: &Destination,
) -> Vec<Interest> {
    selected
        .intersection(&destination.interests)
        .copied()
        .collect()
}
