//! Travel DNA quiz definition and its answer→contribution table.
//!
//! The table is plain data: every admissible `(question, choice)` pair maps
//! to the partial [`DimensionVector`] it credits. The profiler only sums and
//! normalizes, so alternative quizzes can be tested by building a different
//! table.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::models::{Dimension, DimensionVector, QuestionId};

/// A labelled option of a choice question
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOption {
    pub label: &'static str,
    pub dimension: Dimension,
}

/// Shape of a question's admissible answers
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Option `i` credits 1.0 to its dimension
    Choice { options: Vec<ChoiceOption> },
    /// Value `v` in `min..=max` credits `v / max` to `high` and
    /// `(max - v) / max` to `low`
    Slider {
        min: u8,
        max: u8,
        high: Dimension,
        low: Dimension,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// Options shared by the seven-way choice questions, in dimension order
fn choice(labels: [&'static str; 7]) -> QuestionKind {
    let options = labels
        .into_iter()
        .zip(Dimension::ALL)
        .map(|(label, dimension)| ChoiceOption { label, dimension })
        .collect();
    QuestionKind::Choice { options }
}

fn slider(high: Dimension, low: Dimension) -> QuestionKind {
    QuestionKind::Slider {
        min: 1,
        max: 10,
        high,
        low,
    }
}

/// Ordered list of quiz questions
#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The eight-question Travel DNA quiz
    pub fn standard() -> Self {
        let questions = vec![
            Question {
                id: QuestionId::VacationInstinct,
                prompt: "When you hear 'vacation', what's your first instinct?",
                kind: choice([
                    "Find the most thrilling activity available",
                    "Find the most relaxing beach or spa",
                    "Research historical and cultural sites",
                    "Book the most luxurious accommodation",
                    "Look for natural landscapes and wildlife",
                    "Explore city attractions and nightlife",
                    "Plan activities where I can meet new people",
                ]),
            },
            Question {
                id: QuestionId::BudgetAllocation,
                prompt: "How do you typically allocate your travel budget?",
                kind: choice([
                    "Experiences and adventures first",
                    "Comfort and relaxation services",
                    "Museums, tours, and cultural activities",
                    "Premium accommodations and dining",
                    "Outdoor gear and park fees",
                    "Urban attractions and transportation",
                    "Social activities and group experiences",
                ]),
            },
            Question {
                id: QuestionId::TravelPace,
                prompt: "What pace feels most natural for your travels? (1 = slow, 10 = packed)",
                kind: slider(Dimension::Adventure, Dimension::Comfort),
            },
            Question {
                id: QuestionId::Accommodation,
                prompt: "Your ideal accommodation is...",
                kind: choice([
                    "A base camp for daily adventures",
                    "A quiet retreat with spa facilities",
                    "Centrally located for cultural access",
                    "A 5-star resort with all amenities",
                    "An eco-lodge in nature",
                    "A trendy hotel in the city center",
                    "A social hostel or guesthouse",
                ]),
            },
            Question {
                id: QuestionId::ItineraryStructure,
                prompt: "How structured do you prefer your itinerary? (1 = fixed, 10 = improvised)",
                kind: slider(Dimension::Adventure, Dimension::Comfort),
            },
            Question {
                id: QuestionId::Activities,
                prompt: "Which activities excite you most?",
                kind: choice([
                    "Hiking, rafting, or extreme sports",
                    "Spa treatments and beach lounging",
                    "Museum visits and historical tours",
                    "Fine dining and luxury shopping",
                    "Wildlife safaris and nature walks",
                    "City tours and architectural sights",
                    "Local festivals and social events",
                ]),
            },
            Question {
                id: QuestionId::SocialImportance,
                prompt: "How important are social interactions during travel? (1 = not at all, 10 = essential)",
                kind: slider(Dimension::Social, Dimension::Comfort),
            },
            Question {
                id: QuestionId::Souvenir,
                prompt: "What do you want to bring home from your travels?",
                kind: choice([
                    "Adrenaline-filled memories",
                    "Complete relaxation and rejuvenation",
                    "Cultural understanding and knowledge",
                    "Luxury experiences and photos",
                    "Connection with nature",
                    "Urban experiences and trends",
                    "New friendships and connections",
                ]),
            },
        ];
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Expand every admissible answer into the contribution table
    pub fn contribution_table(&self) -> ContributionTable {
        let mut entries = Vec::new();

        for question in &self.questions {
            match &question.kind {
                QuestionKind::Choice { options } => {
                    for (index, option) in options.iter().enumerate() {
                        let Ok(choice) = u8::try_from(index) else {
                            break;
                        };
                        entries.push((
                            AnswerKey::new(question.id, choice),
                            DimensionVector::unit(option.dimension, 1.0),
                        ));
                    }
                }
                QuestionKind::Slider { min, max, high, low } => {
                    let scale = f64::from(*max);
                    for value in *min..=*max {
                        let mut credit = DimensionVector::unit(*high, f64::from(value) / scale);
                        *credit.get_mut(*low) += f64::from(max - value) / scale;
                        entries.push((AnswerKey::new(question.id, value), credit));
                    }
                }
            }
        }

        ContributionTable::from_entries(entries)
    }
}

/// One admissible answer: a question and the chosen option or slider value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerKey {
    pub question: QuestionId,
    pub choice: u8,
}

impl AnswerKey {
    pub fn new(question: QuestionId, choice: u8) -> Self {
        Self { question, choice }
    }
}

/// Lookup from answer to partial dimension credit
#[derive(Debug, Clone)]
pub struct ContributionTable {
    entries: HashMap<AnswerKey, DimensionVector>,
    questions: BTreeSet<QuestionId>,
    max_attainable: DimensionVector,
}

impl ContributionTable {
    /// Build a table from explicit entries
    ///
    /// The maximum attainable score per dimension is the sum, over questions,
    /// of the largest credit any single answer to that question gives it.
    pub fn from_entries(entries: impl IntoIterator<Item = (AnswerKey, DimensionVector)>) -> Self {
        let entries: HashMap<AnswerKey, DimensionVector> = entries.into_iter().collect();
        let questions: BTreeSet<QuestionId> = entries.keys().map(|k| k.question).collect();

        let mut max_attainable = DimensionVector::ZERO;
        for question in &questions {
            let best = entries
                .iter()
                .filter(|(key, _)| key.question == *question)
                .fold(DimensionVector::ZERO, |acc, (_, credit)| acc.max(credit));
            max_attainable += best;
        }

        Self {
            entries,
            questions,
            max_attainable,
        }
    }

    pub fn contribution(&self, key: &AnswerKey) -> Option<&DimensionVector> {
        self.entries.get(key)
    }

    /// Questions that must all be answered
    pub fn questions(&self) -> &BTreeSet<QuestionId> {
        &self.questions
    }

    pub fn max_attainable(&self) -> &DimensionVector {
        &self.max_attainable
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
