//! HTTP adapter for the trivia question API.
//!
//! One GET at startup, normalized into [`TriviaQuestion`] records. Transport
//! and parsing are split so the normalization contract can be tested without
//! a network.

use crate::models::{IncorrectAnswerCount, RawQuestion, TriviaQuestion};

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The request failed or the server answered with a non-success status.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not the expected JSON array of questions.
    #[error("unexpected response shape: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A question record violated the three-incorrect-answers invariant.
    #[error("question {index}: {source}")]
    InvalidQuestion {
        index: usize,
        source: IncorrectAnswerCount,
    },

    /// The response parsed but contained no questions.
    #[error("response contained no questions")]
    Empty,
}

/// Fetch one batch of questions from `endpoint`.
///
/// Suspends until the round trip completes; the returned list preserves the
/// order of the response.
pub async fn fetch_questions(endpoint: &str) -> Result<Vec<TriviaQuestion>, FetchError> {
    tracing::debug!(endpoint, "fetching trivia questions");

    let response = reqwest::get(endpoint).await?.error_for_status()?;
    let body = response.text().await?;
    let questions = parse_questions(&body)?;

    tracing::info!(count = questions.len(), "fetched trivia questions");
    Ok(questions)
}

/// Parse and normalize a response body.
pub fn parse_questions(body: &str) -> Result<Vec<TriviaQuestion>, FetchError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(body)?;

    if raw.is_empty() {
        return Err(FetchError::Empty);
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            TriviaQuestion::try_from(record)
                .map_err(|source| FetchError::InvalidQuestion { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"[
        {
            "id": "622a1c357cc59eab6f94ff56",
            "category": "science",
            "correctAnswer": "Jupiter",
            "incorrectAnswers": ["Saturn", "Neptune", "Mars"],
            "question": {"text": "Which is the largest planet in the solar system?"},
            "tags": ["space"],
            "type": "text_choice",
            "difficulty": "easy",
            "regions": [],
            "isNiche": false
        },
        {
            "id": "623c1c357cc59eab6f94ff57",
            "category": "music",
            "correctAnswer": "Queen",
            "incorrectAnswers": ["ABBA", "Blur", "Wham!"],
            "question": {"text": "Who recorded Bohemian Rhapsody?"},
            "tags": [],
            "type": "text_choice",
            "difficulty": "medium",
            "regions": [],
            "isNiche": false
        }
    ]"#;

    #[test]
    fn test_parse_preserves_order_and_fields() {
        let questions = parse_questions(SAMPLE_BODY).unwrap();
        assert_eq!(questions.len(), 2);

        assert_eq!(questions[0].category, "science");
        assert_eq!(questions[0].correct_answer, "Jupiter");
        assert_eq!(questions[0].incorrect_answers, ["Saturn", "Neptune", "Mars"]);
        assert_eq!(
            questions[0].question,
            "Which is the largest planet in the solar system?"
        );
        assert_eq!(questions[1].category, "music");
    }

    #[test]
    fn test_parse_rejects_non_array_body() {
        let err = parse_questions(r#"{"error": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_empty_batch() {
        let err = parse_questions("[]").unwrap_err();
        assert!(matches!(err, FetchError::Empty));
    }

    #[test]
    fn test_parse_rejects_wrong_incorrect_answer_count() {
        let body = r#"[{
            "category": "science",
            "correctAnswer": "Jupiter",
            "incorrectAnswers": ["Saturn", "Neptune"],
            "question": {"text": "Which is the largest planet in the solar system?"}
        }]"#;

        let err = parse_questions(body).unwrap_err();
        match err {
            FetchError::InvalidQuestion { index, source } => {
                assert_eq!(index, 0);
                assert_eq!(source, IncorrectAnswerCount(2));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
