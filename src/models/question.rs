use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Labels shown for a same-letter question, in display order.
pub const OPTION_LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// The question types the generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Two word fragments completed by the same letter.
    SameLetterMc,
    /// A free-text question with four answers.
    MultipleChoice,
}

impl QuestionKind {
    /// Every supported kind, in the order they are offered to the user.
    pub const ALL: [QuestionKind; 2] = [QuestionKind::SameLetterMc, QuestionKind::MultipleChoice];

    /// The `type` discriminant written to the output file.
    pub fn tag(self) -> &'static str {
        match self {
            QuestionKind::SameLetterMc => "same-letter-mc",
            QuestionKind::MultipleChoice => "multiple-choice",
        }
    }

    /// Comma separated list of all tags, for help text.
    pub fn supported_list() -> String {
        Self::ALL.iter().map(|kind| kind.tag()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a type string matches none of [`QuestionKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported question type: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for QuestionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// A single persisted quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Question {
    #[serde(rename = "same-letter-mc")]
    SameLetterMc(SameLetterMc),
    #[serde(rename = "multiple-choice")]
    MultipleChoice(MultipleChoice),
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::SameLetterMc(_) => QuestionKind::SameLetterMc,
            Question::MultipleChoice(_) => QuestionKind::MultipleChoice,
        }
    }

    pub fn correct(&self) -> &str {
        match self {
            Question::SameLetterMc(q) => &q.correct,
            Question::MultipleChoice(q) => &q.correct,
        }
    }

    /// Whether `correct` names one of the declared choices.
    ///
    /// Nothing rejects a question when this is false; callers only warn.
    pub fn correct_is_listed(&self) -> bool {
        match self {
            Question::SameLetterMc(q) => {
                q.options.contains(&q.correct) || q.option_letters.contains(&q.correct)
            }
            Question::MultipleChoice(q) => q.answers.contains(&q.correct),
        }
    }
}

impl From<SameLetterMc> for Question {
    fn from(q: SameLetterMc) -> Self {
        Question::SameLetterMc(q)
    }
}

impl From<MultipleChoice> for Question {
    fn from(q: MultipleChoice) -> Self {
        Question::MultipleChoice(q)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SameLetterMc {
    /// Fragments placed before and after the missing letter.
    pub text: [String; 2],
    pub options: [String; 5],
    /// Letter value for each entry of `options`, same position.
    pub option_letters: [String; 5],
    pub correct: String,
    pub explanation: String,
}

impl SameLetterMc {
    /// Options are always the fixed labels `A` through `E`.
    pub fn new(
        text: [String; 2],
        option_letters: [String; 5],
        correct: String,
        explanation: String,
    ) -> Self {
        Self {
            text,
            options: OPTION_LABELS.map(String::from),
            option_letters,
            correct,
            explanation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoice {
    pub text: String,
    pub answers: [String; 4],
    pub correct: String,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings<const N: usize>(values: [&str; N]) -> [String; N] {
        values.map(String::from)
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("same-letter-mc".parse::<QuestionKind>(), Ok(QuestionKind::SameLetterMc));
        assert_eq!("multiple-choice".parse::<QuestionKind>(), Ok(QuestionKind::MultipleChoice));
        assert_eq!(
            "essay".parse::<QuestionKind>(),
            Err(UnknownKind("essay".to_string()))
        );
        // Tags are matched exactly.
        assert!("Multiple-Choice".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn test_supported_list() {
        assert_eq!(QuestionKind::supported_list(), "same-letter-mc, multiple-choice");
    }

    #[test]
    fn test_same_letter_options_are_fixed() {
        let q = SameLetterMc::new(
            strings(["dis", "urt"]),
            strings(["x", "y", "z", "w", "v"]),
            "z".to_string(),
            String::new(),
        );
        assert_eq!(q.options, strings(["A", "B", "C", "D", "E"]));
    }

    #[test]
    fn test_serialization_shape() {
        let q: Question = SameLetterMc::new(
            strings(["dis", "urt"]),
            strings(["a", "b", "c", "d", "e"]),
            "c".to_string(),
            "test".to_string(),
        )
        .into();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(
            json,
            r#"{"type":"same-letter-mc","text":["dis","urt"],"options":["A","B","C","D","E"],"optionLetters":["a","b","c","d","e"],"correct":"c","explanation":"test"}"#
        );

        let q: Question = MultipleChoice {
            text: "2 + 2?".to_string(),
            answers: strings(["3", "4", "5", "22"]),
            correct: "4".to_string(),
            explanation: String::new(),
        }
        .into();
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.starts_with(r#"{"type":"multiple-choice","text":"2 + 2?","answers":"#));
    }

    #[test]
    fn test_correct_is_listed() {
        let mut q = SameLetterMc::new(
            strings(["dis", "urt"]),
            strings(["a", "b", "c", "d", "e"]),
            "c".to_string(),
            String::new(),
        );
        assert!(Question::from(q.clone()).correct_is_listed());
        q.correct = "C".to_string();
        assert!(Question::from(q.clone()).correct_is_listed());
        q.correct = "q".to_string();
        assert!(!Question::from(q).correct_is_listed());

        let mc = MultipleChoice {
            text: "Capital of France?".to_string(),
            answers: strings(["Paris", "Rome", "Oslo", "Bern"]),
            correct: "paris".to_string(),
            explanation: String::new(),
        };
        assert!(!Question::from(mc).correct_is_listed());
    }
}
