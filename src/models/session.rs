//! Quiz progress state.

use super::TriviaQuestion;

/// Progress and score through a fixed question list.
///
/// `question_index` points at the next unanswered question and doubles as
/// the count of answered questions, so `score <= question_index` holds at
/// all times.
pub struct QuizSession {
    questions: Vec<TriviaQuestion>,
    question_index: usize,
    score: usize,
    answers: Vec<Option<bool>>,
}

impl QuizSession {
    pub fn new(questions: Vec<TriviaQuestion>) -> Self {
        let num_questions = questions.len();

        Self {
            questions,
            question_index: 0,
            score: 0,
            answers: vec![None; num_questions],
        }
    }

    /// The question currently awaiting an answer, `None` once the list is
    /// exhausted.
    pub fn current_question(&self) -> Option<&TriviaQuestion> {
        self.questions.get(self.question_index)
    }

    pub fn current_question_number(&self) -> usize {
        self.question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.question_index
    }

    pub fn questions(&self) -> &[TriviaQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<bool>] {
        &self.answers
    }

    pub fn is_finished(&self) -> bool {
        self.question_index >= self.questions.len()
    }

    /// Record the outcome of the current question and advance the cursor.
    /// Does nothing once the list is exhausted.
    pub fn record_answer(&mut self, correct: bool) {
        if self.is_finished() {
            return;
        }

        if correct {
            self.score += 1;
        }
        self.answers[self.question_index] = Some(correct);
        self.question_index += 1;
    }

    /// The running score display, empty until the first answer.
    pub fn score_line(&self) -> Option<String> {
        if self.question_index == 0 {
            None
        } else {
            Some(format!("Score: {}/{}", self.score, self.question_index))
        }
    }

    pub fn restart(&mut self) {
        self.question_index = 0;
        self.score = 0;
        self.answers = vec![None; self.questions.len()];
    }
}
