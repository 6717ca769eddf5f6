//! Question data model
//!
//! The quiz runs over a static, ordered list of true/false questions.

use std::fmt;

/// Opaque reference to the picture shown above a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(&'static str);

impl ImageRef {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn id(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A single true/false question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Text shown to the player
    pub text: &'static str,
    /// The answer that counts as correct
    pub correct: bool,
    /// Picture shown with the question
    pub image: ImageRef,
}

impl Question {
    pub const fn new(text: &'static str, correct: bool, image: ImageRef) -> Self {
        Self {
            text,
            correct,
            image,
        }
    }

    /// Whether `answer` is the right answer to this question
    pub fn is_correct(&self, answer: bool) -> bool {
        answer == self.correct
    }
}

/// Built-in questions, in display order
pub const QUESTIONS: [Question; 5] = [
    Question::new("¿Es el cielo azul?", true, ImageRef::new("image1")),
    Question::new("¿2 + 2 = 5?", false, ImageRef::new("image2")),
    Question::new("¿La Tierra es plana?", false, ImageRef::new("image3")),
    Question::new("¿El agua hierve a 100°C?", true, ImageRef::new("image4")),
    Question::new("¿La luna es un planeta?", false, ImageRef::new("image5")),
];

/// Immutable, non-empty ordered view over a list of questions
#[derive(Debug, Clone, Copy)]
pub struct QuestionSet {
    questions: &'static [Question],
}

impl QuestionSet {
    /// The built-in five-question set
    pub fn builtin() -> Self {
        Self {
            questions: &QUESTIONS,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index`, wrapped into range
    pub fn get(&self, index: usize) -> &Question {
        &self.questions[index % self.questions.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set() {
        let set = QuestionSet::builtin();
        assert_eq!(set.len(), 5);
        assert!(!set.is_empty());

        let first = set.get(0);
        assert_eq!(first.text, "¿Es el cielo azul?");
        assert!(first.correct);
        assert_eq!(first.image.id(), "image1");

        let answers: Vec<bool> = set.iter().map(|q| q.correct).collect();
        assert_eq!(answers, vec![true, false, false, true, false]);
    }

    #[test]
    fn test_is_correct() {
        let question = QUESTIONS[1];
        assert!(question.is_correct(false));
        assert!(!question.is_correct(true));
    }

    #[test]
    fn test_get_wraps_index() {
        let set = QuestionSet::builtin();
        assert_eq!(set.get(5).text, set.get(0).text);
        assert_eq!(set.get(7).image.to_string(), "image3");
    }
}
