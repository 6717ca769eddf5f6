//! Quiz session state
//!
//! One session lives for a single visit to the question screen. It tracks
//! which question is shown, the answer picked for it and the outcome of the
//! most recent answer, which is what gets recorded when the visit ends.

use super::question::{Question, QuestionSet};
use crate::config::ExitRecording;
use rand::Rng;

/// Display state of the question screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    /// Question shown, nothing selected yet
    Displaying,
    /// An answer was selected and its result is shown
    AnswerShown { answer: bool, correct: bool },
}

/// Per-visit state of the question screen
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: QuestionSet,
    current_index: usize,
    selected_answer: Option<bool>,
    last_outcome_correct: bool,
    answered: bool,
}

impl QuizSession {
    /// Start a session at the first question
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            current_index: 0,
            selected_answer: None,
            last_outcome_correct: false,
            answered: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        self.questions.get(self.current_index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_answer(&self) -> Option<bool> {
        self.selected_answer
    }

    /// Outcome of the most recent answer; `false` until one is given
    pub fn last_outcome_correct(&self) -> bool {
        self.last_outcome_correct
    }

    /// Whether any answer was selected during this session
    pub fn has_answered(&self) -> bool {
        self.answered
    }

    pub fn state(&self) -> AnswerState {
        match self.selected_answer {
            Some(answer) => AnswerState::AnswerShown {
                answer,
                correct: self.last_outcome_correct,
            },
            None => AnswerState::Displaying,
        }
    }

    /// Answer the current question, returning whether the answer was correct
    pub fn select(&mut self, answer: bool) -> bool {
        let correct = self.current_question().is_correct(answer);
        self.selected_answer = Some(answer);
        self.last_outcome_correct = correct;
        self.answered = true;
        correct
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.questions.len();
        self.selected_answer = None;
    }

    pub fn prev(&mut self) {
        let len = self.questions.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.selected_answer = None;
    }

    /// Jump to a uniformly chosen question
    pub fn random(&mut self) {
        self.random_with(&mut rand::thread_rng());
    }

    /// Jump to a question chosen by `rng`
    pub fn random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current_index = rng.gen_range(0..self.questions.len());
        self.selected_answer = None;
    }

    /// Outcome to record when the session ends, if any
    pub fn outcome_on_exit(&self, policy: ExitRecording) -> Option<bool> {
        match policy {
            ExitRecording::LastOutcome => Some(self.last_outcome_correct),
            ExitRecording::AnsweredOnly if self.answered => Some(self.last_outcome_correct),
            ExitRecording::AnsweredOnly => None,
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(QuestionSet::builtin())
    }
}
