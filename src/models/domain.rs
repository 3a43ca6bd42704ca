use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::ops::AddAssign;

/// Number of psychological axes in a [`DimensionVector`]
pub const DIMENSION_COUNT: usize = 7;

/// Monthly lookup table, January first
pub type MonthlyTable = [f64; 12];

/// Psychological travel axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Adventure,
    Comfort,
    Culture,
    Luxury,
    Nature,
    Urban,
    Social,
}

impl Dimension {
    /// All dimensions in declaration order
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Adventure,
        Dimension::Comfort,
        Dimension::Culture,
        Dimension::Luxury,
        Dimension::Nature,
        Dimension::Urban,
        Dimension::Social,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Adventure => "Adventure",
            Dimension::Comfort => "Comfort",
            Dimension::Culture => "Culture",
            Dimension::Luxury => "Luxury",
            Dimension::Nature => "Nature",
            Dimension::Urban => "Urban",
            Dimension::Social => "Social",
        }
    }
}

/// Normalized coordinates across the travel dimensions
///
/// Used both for archetype centroids and destination affinities.
/// Components are expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionVector {
    pub adventure: f64,
    pub comfort: f64,
    pub culture: f64,
    pub luxury: f64,
    pub nature: f64,
    pub urban: f64,
    pub social: f64,
}

impl DimensionVector {
    pub const ZERO: DimensionVector = DimensionVector {
        adventure: 0.0,
        comfort: 0.0,
        culture: 0.0,
        luxury: 0.0,
        nature: 0.0,
        urban: 0.0,
        social: 0.0,
    };

    /// Build from values in [`Dimension::ALL`] order
    pub fn from_array(values: [f64; DIMENSION_COUNT]) -> Self {
        let [adventure, comfort, culture, luxury, nature, urban, social] = values;
        Self {
            adventure,
            comfort,
            culture,
            luxury,
            nature,
            urban,
            social,
        }
    }

    pub fn to_array(&self) -> [f64; DIMENSION_COUNT] {
        [
            self.adventure,
            self.comfort,
            self.culture,
            self.luxury,
            self.nature,
            self.urban,
            self.social,
        ]
    }

    /// Vector with `value` on a single axis and zero elsewhere
    pub fn unit(dimension: Dimension, value: f64) -> Self {
        let mut vector = Self::ZERO;
        *vector.get_mut(dimension) = value;
        vector
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.to_array()[dimension.index()]
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut f64 {
        match dimension {
            Dimension::Adventure => &mut self.adventure,
            Dimension::Comfort => &mut self.comfort,
            Dimension::Culture => &mut self.culture,
            Dimension::Luxury => &mut self.luxury,
            Dimension::Nature => &mut self.nature,
            Dimension::Urban => &mut self.urban,
            Dimension::Social => &mut self.social,
        }
    }

    /// Component-wise maximum
    pub fn max(&self, other: &DimensionVector) -> Self {
        let a = self.to_array();
        let b = other.to_array();
        Self::from_array(std::array::from_fn(|i| a[i].max(b[i])))
    }

    /// Clamp every component to `[0, 1]`, mapping non-finite values to 0
    pub fn clamped(&self) -> Self {
        Self::from_array(self.to_array().map(|v| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }))
    }

    /// True when every component is finite and within `[0, 1]`
    pub fn is_normalized(&self) -> bool {
        self.to_array()
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
    }

    /// Strongest axis; the earliest dimension wins ties
    pub fn dominant(&self) -> Dimension {
        let values = self.to_array();
        let mut best = Dimension::Adventure;
        for dimension in Dimension::ALL {
            if values[dimension.index()] > values[best.index()] {
                best = dimension;
            }
        }
        best
    }
}

impl AddAssign for DimensionVector {
    fn add_assign(&mut self, rhs: Self) {
        for dimension in Dimension::ALL {
            *self.get_mut(dimension) += rhs.get(dimension);
        }
    }
}

/// Travel personality archetype
///
/// Declaration order is significant: nearest-centroid ties resolve to the
/// earlier variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    AdventureSeeker,
    CultureConnoisseur,
    LuxuryEscapist,
    NatureImmerser,
    UrbanExplorer,
    RelaxationChaser,
    SocialConnector,
}

impl Archetype {
    pub const ALL: [Archetype; 7] = [
        Archetype::AdventureSeeker,
        Archetype::CultureConnoisseur,
        Archetype::LuxuryEscapist,
        Archetype::NatureImmerser,
        Archetype::UrbanExplorer,
        Archetype::RelaxationChaser,
        Archetype::SocialConnector,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Archetype::AdventureSeeker => "Adventure Seeker",
            Archetype::CultureConnoisseur => "Culture Connoisseur",
            Archetype::LuxuryEscapist => "Luxury Escapist",
            Archetype::NatureImmerser => "Nature Immerser",
            Archetype::UrbanExplorer => "Urban Explorer",
            Archetype::RelaxationChaser => "Relaxation Chaser",
            Archetype::SocialConnector => "Social Connector",
        }
    }

    /// Identifier used in requests and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Archetype::AdventureSeeker => "adventure_seeker",
            Archetype::CultureConnoisseur => "culture_connoisseur",
            Archetype::LuxuryEscapist => "luxury_escapist",
            Archetype::NatureImmerser => "nature_immerser",
            Archetype::UrbanExplorer => "urban_explorer",
            Archetype::RelaxationChaser => "relaxation_chaser",
            Archetype::SocialConnector => "social_connector",
        }
    }

    pub fn traits(self) -> &'static str {
        match self {
            Archetype::AdventureSeeker => "Thrill-seeking, Spontaneous, Risk-tolerant",
            Archetype::CultureConnoisseur => "Intellectual, Curious, Historically-minded",
            Archetype::LuxuryEscapist => "Comfort-oriented, Quality-focused, Service-expecting",
            Archetype::NatureImmerser => "Eco-conscious, Peace-seeking, Nature-connected",
            Archetype::UrbanExplorer => "Energy-seeking, Social, Trend-aware",
            Archetype::RelaxationChaser => "Calm, Rejuvenation-focused, Slow-paced",
            Archetype::SocialConnector => "People-oriented, Communicative, Experience-sharing",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Archetype::AdventureSeeker => "Active exploration, off-the-beaten-path, physical challenges",
            Archetype::CultureConnoisseur => "Museum-hopping, local immersion, culinary exploration",
            Archetype::LuxuryEscapist => "Premium accommodations, exclusive access, pampering services",
            Archetype::NatureImmerser => "Outdoor activities, wildlife watching, sustainable travel",
            Archetype::UrbanExplorer => "City hopping, nightlife, modern architecture",
            Archetype::RelaxationChaser => "Beach lounging, spa retreats, minimal planning",
            Archetype::SocialConnector => "Group tours, local interactions, social experiences",
        }
    }

    pub fn perfect_for(self) -> &'static str {
        match self {
            Archetype::AdventureSeeker => "Extreme sports, remote destinations, unpredictable itineraries",
            Archetype::CultureConnoisseur => "Historical sites, artistic hubs, traditional experiences",
            Archetype::LuxuryEscapist => "5-star resorts, private tours, gourmet dining",
            Archetype::NatureImmerser => "National parks, eco-lodges, wilderness retreats",
            Archetype::UrbanExplorer => "Metropolitan cities, tech hubs, contemporary art scenes",
            Archetype::RelaxationChaser => "Beach resorts, wellness retreats, countryside escapes",
            Archetype::SocialConnector => "Festivals, community stays, shared accommodations",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Archetype {
    type Err = String;

    /// Accepts the snake_case key or the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Archetype::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(wanted) || a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown archetype '{}'", wanted))
    }
}

/// Fixed interest vocabulary shared by users and destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Beaches,
    Mountains,
    Cities,
    History,
    Food,
    Adventure,
    Wellness,
    Shopping,
    Nature,
    Culture,
}

/// Destination category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Adventure,
    Cultural,
    Luxury,
    Nature,
    Urban,
    Beach,
    Wellness,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Adventure,
        Category::Cultural,
        Category::Luxury,
        Category::Nature,
        Category::Urban,
        Category::Beach,
        Category::Wellness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Adventure => "Adventure",
            Category::Cultural => "Cultural",
            Category::Luxury => "Luxury",
            Category::Nature => "Nature",
            Category::Urban => "Urban",
            Category::Beach => "Beach",
            Category::Wellness => "Wellness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category '{}'", wanted))
    }
}

/// Meteorological season (northern hemisphere months)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Season for a 1-based month number
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Seasons on either side of this one in the yearly cycle
    pub fn neighbours(self) -> [Season; 2] {
        match self {
            Season::Winter => [Season::Fall, Season::Spring],
            Season::Spring => [Season::Winter, Season::Summer],
            Season::Summer => [Season::Spring, Season::Fall],
            Season::Fall => [Season::Summer, Season::Winter],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl FromStr for Season {
    type Err = String;

    /// Accepts "autumn" as an alias of fall
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("autumn") {
            return Ok(Season::Fall);
        }
        Season::ALL
            .into_iter()
            .find(|season| season.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown season '{}'", wanted))
    }
}

/// Coarse price class derived from a destination's typical cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBracket {
    Budget,
    Moderate,
    Premium,
    Luxury,
}

impl BudgetBracket {
    pub fn from_cost(cost: f64) -> Self {
        if cost < 2000.0 {
            BudgetBracket::Budget
        } else if cost < 3500.0 {
            BudgetBracket::Moderate
        } else if cost < 5000.0 {
            BudgetBracket::Premium
        } else {
            BudgetBracket::Luxury
        }
    }
}

/// Validated catalog destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub category: Category,
    pub description: String,
    pub highlights: Vec<String>,
    /// Typical trip cost in USD
    pub typical_cost: f64,
    pub best_seasons: Vec<Season>,
    /// Weather suitability per month in `[0, 1]`
    pub weather_by_month: MonthlyTable,
    /// Crowd density per month in `[0, 1]`, higher is busier
    pub crowd_by_month: MonthlyTable,
    pub interests: BTreeSet<Interest>,
    pub dna: DimensionVector,
}

impl Destination {
    pub fn budget_bracket(&self) -> BudgetBracket {
        BudgetBracket::from_cost(self.typical_cost)
    }
}

/// Raw catalog record as read from a data file
///
/// Every field a [`Destination`] requires is optional here so that
/// incomplete records can be detected and skipped rather than failing
/// the whole catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub typical_cost: Option<f64>,
    #[serde(default)]
    pub best_seasons: Vec<Season>,
    #[serde(default)]
    pub weather_by_month: Option<Vec<f64>>,
    #[serde(default)]
    pub crowd_by_month: Option<Vec<f64>>,
    #[serde(default)]
    pub interests: BTreeSet<Interest>,
    #[serde(default)]
    pub dna: Option<RawDimensionVector>,
}

/// Dimension scores as read from a data file, each axis optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDimensionVector {
    #[serde(default)]
    pub adventure: Option<f64>,
    #[serde(default)]
    pub comfort: Option<f64>,
    #[serde(default)]
    pub culture: Option<f64>,
    #[serde(default)]
    pub luxury: Option<f64>,
    #[serde(default)]
    pub nature: Option<f64>,
    #[serde(default)]
    pub urban: Option<f64>,
    #[serde(default)]
    pub social: Option<f64>,
}

impl RawDimensionVector {
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Adventure => self.adventure,
            Dimension::Comfort => self.comfort,
            Dimension::Culture => self.culture,
            Dimension::Luxury => self.luxury,
            Dimension::Nature => self.nature,
            Dimension::Urban => self.urban,
            Dimension::Social => self.social,
        }
    }

    /// The full vector, or the first axis that was not supplied
    pub fn complete(&self) -> Result<DimensionVector, Dimension> {
        let mut vector = DimensionVector::ZERO;
        for dimension in Dimension::ALL {
            *vector.get_mut(dimension) = self.get(dimension).ok_or(dimension)?;
        }
        Ok(vector)
    }
}

impl From<DimensionVector> for RawDimensionVector {
    fn from(vector: DimensionVector) -> Self {
        Self {
            adventure: Some(vector.adventure),
            comfort: Some(vector.comfort),
            culture: Some(vector.culture),
            luxury: Some(vector.luxury),
            nature: Some(vector.nature),
            urban: Some(vector.urban),
            social: Some(vector.social),
        }
    }
}

/// User budget range in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn contains(&self, cost: f64) -> bool {
        cost >= self.min && cost <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Inclusive travel window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TravelDates {
    /// Number of travel days, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Share of travel days falling in each month, January first
    ///
    /// Weights sum to 1. A reversed window counts as the start day only.
    /// Walks the window one calendar month at a time, so the cost grows with
    /// the number of months spanned rather than the number of days.
    pub fn month_weights(&self) -> MonthlyTable {
        let mut weights = [0.0; 12];
        let mut total = 0.0;
        let mut cursor = self.start;

        while cursor <= self.end {
            let month_end = last_day_of_month(cursor);
            let segment_end = month_end.min(self.end);
            let days = ((segment_end - cursor).num_days() + 1) as f64;
            weights[cursor.month0() as usize] += days;
            total += days;
            match month_end.succ_opt() {
                Some(next) => cursor = next,
                None => break,
            }
        }

        if total == 0.0 {
            weights[self.start.month0() as usize] = 1.0;
            return weights;
        }

        weights.map(|w| w / total)
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Classified travel personality
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelDna {
    pub vector: DimensionVector,
    pub archetype: Archetype,
    /// Closeness to the archetype centroid in `[0, 1]`
    pub archetype_match: f64,
}

/// Session-scoped user profile built from a completed quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub session_id: uuid::Uuid,
    pub dna: TravelDna,
    pub budget: BudgetRange,
    pub interests: BTreeSet<Interest>,
    pub travel_dates: TravelDates,
}

/// Per (profile, destination) sub-scores and aggregate, all in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub budget_fit: f64,
    pub dna_match: f64,
    pub environmental_fit: f64,
    pub interest_alignment: f64,
    pub confidence: f64,
}

impl ScoreBreakdown {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_score(self.confidence)
    }
}

/// Human-facing band for a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ConfidenceTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            ConfidenceTier::Excellent
        } else if score >= 0.70 {
            ConfidenceTier::Good
        } else if score >= 0.50 {
            ConfidenceTier::Fair
        } else {
            ConfidenceTier::Poor
        }
    }
}

/// Scoring weights for the confidence aggregate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub budget: f64,
    pub dna: f64,
    pub environment: f64,
    pub interest: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.budget + self.dna + self.environment + self.interest
    }

    /// Weights must be finite, non-negative and not all zero
    pub fn is_valid(&self) -> bool {
        let all = [self.budget, self.dna, self.environment, self.interest];
        all.iter().all(|w| w.is_finite() && *w >= 0.0) && self.total() > 0.0
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget: 0.25,
            dna: 0.20,
            environment: 0.30,
            interest: 0.25,
        }
    }
}

/// Tunable constants of the sub-score formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Floor applied to every sub-score before the geometric mean
    pub epsilon: f64,
    /// Lowest budget fit an over-budget destination can receive
    pub budget_floor: f64,
    /// Budget fit lost by a free trip relative to the range minimum
    pub under_budget_penalty: f64,
    pub weather_weight: f64,
    pub crowd_weight: f64,
    /// Interest alignment reported when the user selected no interests
    pub neutral_interest: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            epsilon: 0.05,
            budget_floor: 0.05,
            under_budget_penalty: 0.2,
            weather_weight: 0.6,
            crowd_weight: 0.4,
            neutral_interest: 0.5,
        }
    }
}

/// Identifier of a quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    VacationInstinct,
    BudgetAllocation,
    TravelPace,
    Accommodation,
    ItineraryStructure,
    Activities,
    SocialImportance,
    Souvenir,
}

impl QuestionId {
    pub const ALL: [QuestionId; 8] = [
        QuestionId::VacationInstinct,
        QuestionId::BudgetAllocation,
        QuestionId::TravelPace,
        QuestionId::Accommodation,
        QuestionId::ItineraryStructure,
        QuestionId::Activities,
        QuestionId::SocialImportance,
        QuestionId::Souvenir,
    ];
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionId::VacationInstinct => "vacation_instinct",
            QuestionId::BudgetAllocation => "budget_allocation",
            QuestionId::TravelPace => "travel_pace",
            QuestionId::Accommodation => "accommodation",
            QuestionId::ItineraryStructure => "itinerary_structure",
            QuestionId::Activities => "activities",
            QuestionId::SocialImportance => "social_importance",
            QuestionId::Souvenir => "souvenir",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_vector_roundtrip_order() {
        let values = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let vector = DimensionVector::from_array(values);
        assert_eq!(vector.to_array(), values);
        assert_eq!(vector.get(Dimension::Luxury), 0.4);
        assert_eq!(vector.get(Dimension::Social), 0.7);
    }

    #[test]
    fn test_dominant_prefers_first_on_tie() {
        let vector = DimensionVector::from_array([0.0, 0.9, 0.0, 0.9, 0.0, 0.0, 0.0]);
        assert_eq!(vector.dominant(), Dimension::Comfort);
    }

    #[test]
    fn test_clamped_handles_nan() {
        let vector = DimensionVector::from_array([f64::NAN, 1.5, -0.2, 0.5, 0.0, 1.0, 0.3]);
        let clamped = vector.clamped();
        assert!(clamped.is_normalized());
        assert_eq!(clamped.adventure, 0.0);
        assert_eq!(clamped.comfort, 1.0);
    }

    #[test]
    fn test_month_weights_span_two_months() {
        let dates = TravelDates {
            start: NaiveDate::from_ymd_opt(2026, 6, 29).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 7, 2).unwrap(),
        };
        let weights = dates.month_weights();
        assert_eq!(dates.days(), 4);
        assert!((weights[5] - 0.5).abs() < 1e-9);
        assert!((weights[6] - 0.5).abs() < 1e-9);
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_weights_match_day_count() {
        let dates = TravelDates {
            start: NaiveDate::from_ymd_opt(2023, 11, 17).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        };
        let mut expected = [0.0; 12];
        let mut day = dates.start;
        while day <= dates.end {
            expected[day.month0() as usize] += 1.0 / dates.days() as f64;
            day = day.succ_opt().unwrap();
        }

        let weights = dates.month_weights();
        for (got, want) in weights.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_month_weights_multi_year_window() {
        let dates = TravelDates {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2027, 12, 31).unwrap(),
        };
        let weights = dates.month_weights();
        assert_eq!(dates.days(), 1461);
        assert!((weights[0] - 124.0 / 1461.0).abs() < 1e-12);
        assert!((weights[1] - 113.0 / 1461.0).abs() < 1e-12);
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_weights_full_calendar_range() {
        let dates = TravelDates {
            start: NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
        };
        let weights = dates.month_weights();
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(weights[0] > weights[1]);
    }

    #[test]
    fn test_month_weights_end_of_calendar() {
        let dates = TravelDates {
            start: NaiveDate::MAX,
            end: NaiveDate::MAX,
        };
        let weights = dates.month_weights();
        assert_eq!(weights[NaiveDate::MAX.month0() as usize], 1.0);
    }

    #[test]
    fn test_month_weights_reversed_window() {
        let dates = TravelDates {
            start: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        };
        let weights = dates.month_weights();
        assert_eq!(weights[2], 1.0);
    }

    #[test]
    fn test_category_and_season_from_str() {
        assert_eq!("cultural".parse::<Category>(), Ok(Category::Cultural));
        assert_eq!(" Beach ".parse::<Category>(), Ok(Category::Beach));
        assert!("museum".parse::<Category>().is_err());

        assert_eq!("SUMMER".parse::<Season>(), Ok(Season::Summer));
        assert_eq!("autumn".parse::<Season>(), Ok(Season::Fall));
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_archetype_from_str() {
        for archetype in Archetype::ALL {
            assert_eq!(archetype.key().parse::<Archetype>(), Ok(archetype));
            assert_eq!(archetype.name().parse::<Archetype>(), Ok(archetype));
            let json = serde_json::to_string(&archetype).unwrap();
            assert_eq!(json, format!("\"{}\"", archetype.key()));
        }
        assert!("space_tourist".parse::<Archetype>().is_err());
    }

    #[test]
    fn test_budget_bracket_thresholds() {
        assert_eq!(BudgetBracket::from_cost(1800.0), BudgetBracket::Budget);
        assert_eq!(BudgetBracket::from_cost(2800.0), BudgetBracket::Moderate);
        assert_eq!(BudgetBracket::from_cost(4200.0), BudgetBracket::Premium);
        assert_eq!(BudgetBracket::from_cost(8500.0), BudgetBracket::Luxury);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-9);
        assert!(weights.is_valid());
        assert!(!ScoringWeights { budget: -0.1, ..weights }.is_valid());
    }

    #[test]
    fn test_season_from_month() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(4), Season::Spring);
        assert_eq!(Season::from_month(7), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Fall);
    }
}
