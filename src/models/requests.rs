use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use validator::{Validate, ValidationError};

use crate::models::domain::{BudgetRange, Interest, QuestionId, TravelDates};

/// Completed quiz: the chosen option (or slider value) per question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers(BTreeMap<QuestionId, u8>);

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question: QuestionId, choice: u8) -> Self {
        self.0.insert(question, choice);
        self
    }

    pub fn insert(&mut self, question: QuestionId, choice: u8) {
        self.0.insert(question, choice);
    }

    pub fn get(&self, question: QuestionId) -> Option<u8> {
        self.0.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, u8)> + '_ {
        self.0.iter().map(|(question, choice)| (*question, *choice))
    }
}

impl FromIterator<(QuestionId, u8)> for QuizAnswers {
    fn from_iter<T: IntoIterator<Item = (QuestionId, u8)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Request to plan a trip
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_trip_request"))]
pub struct TripRequest {
    pub answers: QuizAnswers,
    #[validate(range(min = 0.0))]
    #[serde(alias = "budgetMin")]
    pub budget_min: f64,
    #[validate(range(min = 1.0))]
    #[serde(alias = "budgetMax")]
    pub budget_max: f64,
    #[serde(default)]
    pub interests: BTreeSet<Interest>,
    #[serde(alias = "startDate")]
    pub start_date: NaiveDate,
    #[serde(alias = "endDate")]
    pub end_date: NaiveDate,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl TripRequest {
    pub fn budget(&self) -> BudgetRange {
        BudgetRange {
            min: self.budget_min,
            max: self.budget_max,
        }
    }

    pub fn travel_dates(&self) -> TravelDates {
        TravelDates {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

fn validate_trip_request(request: &TripRequest) -> Result<(), ValidationError> {
    if !request.budget_min.is_finite() || !request.budget_max.is_finite() {
        return Err(ValidationError::new("budget_not_finite"));
    }
    if request.budget_min > request.budget_max {
        return Err(ValidationError::new("budget_min_exceeds_max"));
    }
    if request.end_date < request.start_date {
        return Err(ValidationError::new("end_date_before_start_date"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            answers: QuizAnswers::new(),
            budget_min: 1000.0,
            budget_max: 3000.0,
            interests: BTreeSet::new(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 8).unwrap(),
            limit: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_budget_min_above_max_rejected() {
        let mut req = request();
        req.budget_min = 5000.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_budget_rejected() {
        let mut req = request();
        req.budget_min = -10.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let mut req = request();
        req.end_date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        let mut req = request();
        req.limit = Some(0);
        assert!(req.validate().is_err());
        req.limit = Some(10);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_deserialize_answers_by_question_name() {
        let json = r#"{
            "answers": {"vacation_instinct": 0, "travel_pace": 10},
            "budgetMin": 500, "budgetMax": 2500,
            "interests": ["beaches", "food"],
            "startDate": "2026-07-01", "endDate": "2026-07-10"
        }"#;
        let req: TripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.answers.get(QuestionId::TravelPace), Some(10));
        assert_eq!(req.interests.len(), 2);
        assert_eq!(req.budget().midpoint(), 1500.0);
    }
}
