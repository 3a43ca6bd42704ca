use thiserror::Error;

use crate::core::distance::{euclidean_distance, similarity};
use crate::core::questionnaire::{AnswerKey, ContributionTable, Questionnaire};
use crate::models::{Archetype, DimensionVector, QuizAnswers, TravelDna};

/// Errors that can occur while profiling quiz answers
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Archetype centroids in declaration order
///
/// Order decides ties: the first centroid at the minimum distance wins.
#[derive(Debug, Clone)]
pub struct ArchetypeCentroids {
    centroids: Vec<(Archetype, DimensionVector)>,
}

impl ArchetypeCentroids {
    pub fn new(centroids: Vec<(Archetype, DimensionVector)>) -> Result<Self, ProfileError> {
        if centroids.is_empty() {
            return Err(ProfileError::InvalidInput(
                "at least one archetype centroid is required".to_string(),
            ));
        }
        Ok(Self { centroids })
    }

    /// The seven standard travel personalities
    pub fn standard() -> Self {
        let centroids = Archetype::ALL
            .into_iter()
            .map(|archetype| (archetype, standard_centroid(archetype)))
            .collect();
        Self { centroids }
    }

    pub fn centroid(&self, archetype: Archetype) -> Option<&DimensionVector> {
        self.centroids
            .iter()
            .find(|(a, _)| *a == archetype)
            .map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Archetype, DimensionVector)> {
        self.centroids.iter()
    }

    /// Nearest centroid and its distance
    pub fn nearest(&self, vector: &DimensionVector) -> (Archetype, f64) {
        let (first, first_centroid) = &self.centroids[0];
        let mut best = (*first, euclidean_distance(vector, first_centroid));

        for (archetype, centroid) in self.centroids.iter().skip(1) {
            let distance = euclidean_distance(vector, centroid);
            if distance < best.1 {
                best = (*archetype, distance);
            }
        }

        best
    }
}

impl Default for ArchetypeCentroids {
    fn default() -> Self {
        Self::standard()
    }
}

/// Centroid of an archetype in `[0, 1]` space
///
/// Order: adventure, comfort, culture, luxury, nature, urban, social.
pub fn standard_centroid(archetype: Archetype) -> DimensionVector {
    let values = match archetype {
        Archetype::AdventureSeeker => [0.95, 0.20, 0.40, 0.15, 0.70, 0.30, 0.50],
        Archetype::CultureConnoisseur => [0.30, 0.50, 0.95, 0.40, 0.40, 0.70, 0.60],
        Archetype::LuxuryEscapist => [0.15, 0.95, 0.50, 0.95, 0.30, 0.60, 0.40],
        Archetype::NatureImmerser => [0.60, 0.40, 0.30, 0.20, 0.95, 0.15, 0.30],
        Archetype::UrbanExplorer => [0.40, 0.60, 0.70, 0.50, 0.20, 0.95, 0.70],
        Archetype::RelaxationChaser => [0.15, 0.95, 0.30, 0.70, 0.60, 0.20, 0.20],
        Archetype::SocialConnector => [0.50, 0.50, 0.60, 0.30, 0.40, 0.70, 0.95],
    };
    DimensionVector::from_array(values)
}

/// Travel DNA profiler
///
/// Sums the contribution of each answer, normalizes every dimension by its
/// maximum attainable score, then classifies by nearest centroid.
#[derive(Debug, Clone)]
pub struct TravelDnaProfiler {
    table: ContributionTable,
    centroids: ArchetypeCentroids,
}

impl TravelDnaProfiler {
    pub fn new(table: ContributionTable, centroids: ArchetypeCentroids) -> Self {
        Self { table, centroids }
    }

    /// Profiler over the standard quiz and centroids
    pub fn standard() -> Self {
        Self::new(
            Questionnaire::standard().contribution_table(),
            ArchetypeCentroids::standard(),
        )
    }

    pub fn centroids(&self) -> &ArchetypeCentroids {
        &self.centroids
    }

    /// Classify a completed quiz
    pub fn classify(&self, answers: &QuizAnswers) -> Result<TravelDna, ProfileError> {
        let vector = self.profile_vector(answers)?;
        let (archetype, _) = self.centroids.nearest(&vector);

        let archetype_match = self
            .centroids
            .centroid(archetype)
            .map(|centroid| similarity(&vector, centroid))
            .unwrap_or(0.0);

        tracing::debug!(
            "Classified answers as {} (match {:.2})",
            archetype,
            archetype_match
        );

        Ok(TravelDna {
            vector,
            archetype,
            archetype_match,
        })
    }

    /// Normalized dimension vector for a completed quiz
    pub fn profile_vector(&self, answers: &QuizAnswers) -> Result<DimensionVector, ProfileError> {
        let expected = self.table.questions();

        if answers.len() != expected.len() {
            return Err(ProfileError::InvalidInput(format!(
                "expected {} answers, got {}",
                expected.len(),
                answers.len()
            )));
        }

        let mut raw = DimensionVector::ZERO;
        for (question, choice) in answers.iter() {
            if !expected.contains(&question) {
                return Err(ProfileError::InvalidInput(format!(
                    "question {} is not part of the quiz",
                    question
                )));
            }
            let credit = self
                .table
                .contribution(&AnswerKey::new(question, choice))
                .ok_or_else(|| {
                    ProfileError::InvalidInput(format!(
                        "choice {} is not valid for question {}",
                        choice, question
                    ))
                })?;
            raw += *credit;
        }

        let max = self.table.max_attainable();
        let mut normalized = DimensionVector::ZERO;
        for dimension in crate::models::Dimension::ALL {
            let ceiling = max.get(dimension);
            if ceiling > 0.0 {
                *normalized.get_mut(dimension) = raw.get(dimension) / ceiling;
            }
        }

        Ok(normalized.clamped())
    }
}

impl Default for TravelDnaProfiler {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dimension, QuestionId};

    fn adventurous_answers() -> QuizAnswers {
        QuizAnswers::new()
            .with(QuestionId::VacationInstinct, 0)
            .with(QuestionId::BudgetAllocation, 0)
            .with(QuestionId::TravelPace, 10)
            .with(QuestionId::Accommodation, 0)
            .with(QuestionId::ItineraryStructure, 10)
            .with(QuestionId::Activities, 0)
            .with(QuestionId::SocialImportance, 10)
            .with(QuestionId::Souvenir, 0)
    }

    #[test]
    fn test_adventurous_answers_classify_as_adventure_seeker() {
        let profiler = TravelDnaProfiler::standard();
        let dna = profiler.classify(&adventurous_answers()).unwrap();

        assert!(dna.vector.adventure >= 0.8);
        assert!(dna.vector.comfort <= 0.2);
        assert_eq!(dna.archetype, Archetype::AdventureSeeker);
        assert!(dna.archetype_match > 0.0 && dna.archetype_match <= 1.0);
    }

    #[test]
    fn test_relaxed_answers_classify_as_relaxation_chaser() {
        let answers = QuizAnswers::new()
            .with(QuestionId::VacationInstinct, 1)
            .with(QuestionId::BudgetAllocation, 1)
            .with(QuestionId::TravelPace, 1)
            .with(QuestionId::Accommodation, 1)
            .with(QuestionId::ItineraryStructure, 1)
            .with(QuestionId::Activities, 1)
            .with(QuestionId::SocialImportance, 1)
            .with(QuestionId::Souvenir, 3);
        let dna = TravelDnaProfiler::standard().classify(&answers).unwrap();

        assert_eq!(dna.vector.dominant(), Dimension::Comfort);
        assert!(matches!(
            dna.archetype,
            Archetype::RelaxationChaser | Archetype::LuxuryEscapist
        ));
    }

    #[test]
    fn test_missing_answer_rejected() {
        let answers: QuizAnswers = adventurous_answers()
            .iter()
            .filter(|(q, _)| *q != QuestionId::Souvenir)
            .collect();
        let err = TravelDnaProfiler::standard().classify(&answers).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidInput(_)));
    }

    #[test]
    fn test_out_of_range_choice_rejected() {
        let answers = adventurous_answers().with(QuestionId::Activities, 9);
        let err = TravelDnaProfiler::standard().classify(&answers).unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidInput("choice 9 is not valid for question activities".to_string())
        );
    }

    #[test]
    fn test_tie_resolves_to_first_declared() {
        let shared = DimensionVector::from_array([0.5; 7]);
        let centroids = ArchetypeCentroids::new(vec![
            (Archetype::SocialConnector, shared),
            (Archetype::AdventureSeeker, shared),
        ])
        .unwrap();
        let (winner, _) = centroids.nearest(&DimensionVector::ZERO);
        assert_eq!(winner, Archetype::SocialConnector);
    }

    #[test]
    fn test_empty_centroids_rejected() {
        assert!(ArchetypeCentroids::new(vec![]).is_err());
    }

    #[test]
    fn test_centroids_are_normalized() {
        for (_, centroid) in ArchetypeCentroids::standard().iter() {
            assert!(centroid.is_normalized());
        }
    }
}
