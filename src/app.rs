use rand::Rng;

use crate::models::{AppState, QuizSession, TriviaQuestion};

pub const NUM_SLOTS: usize = 4;

/// Answer slot layout for the question currently on screen.
///
/// `correct_slot` is the answer key; any highlighting is derived from it at
/// draw time. A fresh board is built for every question, so slot roles never
/// carry over between rounds.
pub struct AnswerBoard {
    slots: [String; NUM_SLOTS],
    correct_slot: usize,
}

impl AnswerBoard {
    /// Build a board with the correct answer in a uniformly random slot.
    pub fn assign<R: Rng>(question: &TriviaQuestion, rng: &mut R) -> Self {
        Self::with_correct_slot(question, rng.gen_range(0..NUM_SLOTS))
    }

    /// Build a board with the correct answer at `correct_slot` and the
    /// incorrect answers filling the remaining slots in order.
    pub fn with_correct_slot(question: &TriviaQuestion, correct_slot: usize) -> Self {
        debug_assert!(correct_slot < NUM_SLOTS);

        let [a, b, c] = question.incorrect_answers.clone();
        let correct = question.correct_answer.clone();
        let slots = match correct_slot {
            0 => [correct, a, b, c],
            1 => [a, correct, b, c],
            2 => [a, b, correct, c],
            _ => [a, b, c, correct],
        };

        Self {
            slots,
            correct_slot: correct_slot.min(NUM_SLOTS - 1),
        }
    }

    pub fn slots(&self) -> &[String; NUM_SLOTS] {
        &self.slots
    }

    pub fn correct_slot(&self) -> usize {
        self.correct_slot
    }

    pub fn is_correct(&self, slot: usize) -> bool {
        slot == self.correct_slot
    }
}

pub struct App {
    pub state: AppState,
    session: QuizSession,
    board: AnswerBoard,
    selected_slot: usize,
    result_scroll: usize,
}

impl App {
    pub fn with_questions(questions: Vec<TriviaQuestion>) -> Self {
        let session = QuizSession::new(questions);
        let (state, board) = match session.current_question() {
            Some(question) => (
                AppState::Quiz,
                AnswerBoard::assign(question, &mut rand::thread_rng()),
            ),
            None => (AppState::Result, AnswerBoard::default()),
        };

        Self {
            state,
            session,
            board,
            selected_slot: 0,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn board(&self) -> &AnswerBoard {
        &self.board
    }

    pub fn current_question(&self) -> Option<&TriviaQuestion> {
        self.session.current_question()
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_slot(&mut self) {
        self.selected_slot = (self.selected_slot + 1) % NUM_SLOTS;
    }

    pub fn select_previous_slot(&mut self) {
        self.selected_slot = (self.selected_slot + NUM_SLOTS - 1) % NUM_SLOTS;
    }

    /// Score the selected slot and advance, moving to the results screen
    /// when the last question has been answered.
    pub fn answer_selected(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }

        let correct = self.board.is_correct(self.selected_slot);
        self.session.record_answer(correct);
        self.selected_slot = 0;

        match self.session.current_question() {
            Some(question) => self.board = AnswerBoard::assign(question, &mut rand::thread_rng()),
            None => self.state = AppState::Result,
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.session.restart();
        if let Some(question) = self.session.current_question() {
            self.board = AnswerBoard::assign(question, &mut rand::thread_rng());
            self.state = AppState::Quiz;
        }
        self.selected_slot = 0;
        self.result_scroll = 0;
    }
}

impl Default for AnswerBoard {
    fn default() -> Self {
        Self {
            slots: Default::default(),
            correct_slot: 0,
        }
    }
}
