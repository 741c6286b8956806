use serde::Deserialize;

/// Number of incorrect answers every question must carry.
pub const INCORRECT_ANSWERS_PER_QUESTION: usize = 3;

/// A question as returned by the trivia API.
///
/// Only the fields the quiz consumes are declared; anything else in the
/// response record is dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub category: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub question: QuestionBody,
}

/// The `question` sub-object of an API record. Carries locale variants the
/// quiz ignores; only `text` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBody {
    pub text: String,
}

/// A question normalized for play: category, question text, the correct
/// answer, and exactly three incorrect answers in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaQuestion {
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: [String; INCORRECT_ANSWERS_PER_QUESTION],
}

/// A raw record carried a number of incorrect answers other than three.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected 3 incorrect answers, got {0}")]
pub struct IncorrectAnswerCount(pub usize);

impl TryFrom<RawQuestion> for TriviaQuestion {
    type Error = IncorrectAnswerCount;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let incorrect_answers: [String; INCORRECT_ANSWERS_PER_QUESTION] = raw
            .incorrect_answers
            .try_into()
            .map_err(|rest: Vec<String>| IncorrectAnswerCount(rest.len()))?;

        Ok(Self {
            category: raw.category,
            question: raw.question.text,
            correct_answer: raw.correct_answer,
            incorrect_answers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(incorrect: &[&str]) -> RawQuestion {
        RawQuestion {
            category: "science".to_string(),
            correct_answer: "4".to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
            question: QuestionBody {
                text: "2+2?".to_string(),
            },
        }
    }

    #[test]
    fn test_normalization_preserves_fields() {
        let question = TriviaQuestion::try_from(raw(&["1", "2", "3"])).unwrap();
        assert_eq!(question.category, "science");
        assert_eq!(question.question, "2+2?");
        assert_eq!(question.correct_answer, "4");
        assert_eq!(question.incorrect_answers, ["1", "2", "3"]);
    }

    #[test]
    fn test_normalization_rejects_wrong_count() {
        assert_eq!(
            TriviaQuestion::try_from(raw(&["1", "2"])),
            Err(IncorrectAnswerCount(2))
        );
        assert_eq!(
            TriviaQuestion::try_from(raw(&["1", "2", "3", "5"])),
            Err(IncorrectAnswerCount(4))
        );
    }

    #[test]
    fn test_deserialization_drops_extra_fields() {
        let json = r#"{
            "id": "abc123",
            "category": "music",
            "correctAnswer": "Queen",
            "incorrectAnswers": ["ABBA", "Blur", "Wham!"],
            "question": {"text": "Who recorded Bohemian Rhapsody?"},
            "difficulty": "easy",
            "tags": ["bands"]
        }"#;

        let raw: RawQuestion = serde_json::from_str(json).unwrap();
        let question = TriviaQuestion::try_from(raw).unwrap();
        assert_eq!(question.category, "music");
        assert_eq!(question.question, "Who recorded Bohemian Rhapsody?");
        assert_eq!(question.correct_answer, "Queen");
        assert_eq!(question.incorrect_answers, ["ABBA", "Blur", "Wham!"]);
    }
}
