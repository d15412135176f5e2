//! Interactive builders, one per question kind.
//!
//! Every field accepts any text, including the empty string.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::QuizGenError;
use crate::models::{MultipleChoice, OPTION_LABELS, Question, QuestionKind, SameLetterMc};
use crate::terminal::Console;

const MC_ANSWER_COUNT: usize = 4;

/// Build one question of the given kind.
pub fn build<R: BufRead, W: Write>(
    kind: QuestionKind,
    console: &mut Console<R, W>,
) -> Result<Question, QuizGenError> {
    console.heading(&format!("Enter details for '{}' question:", kind))?;

    let question = match kind {
        QuestionKind::SameLetterMc => build_same_letter_mc(console)?.into(),
        QuestionKind::MultipleChoice => build_multiple_choice(console)?.into(),
    };

    warn_if_unlisted(&question, console)?;
    Ok(question)
}

pub fn build_same_letter_mc<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<SameLetterMc, QuizGenError> {
    let first = console.prompt("First fragment (e.g. dis [?] urt)", None)?;
    let second = console.prompt("Second fragment (e.g. muc [?] ole)", None)?;

    let mut letters: [String; 5] = Default::default();
    for (label, letter) in OPTION_LABELS.iter().zip(letters.iter_mut()) {
        *letter = console.prompt(&format!("Option {} (letter)", label), None)?;
    }

    let correct = console.prompt("Correct letter (must match one of the above)", None)?;
    let explanation = console.prompt("Explanation", None)?;

    Ok(SameLetterMc::new([first, second], letters, correct, explanation))
}

pub fn build_multiple_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<MultipleChoice, QuizGenError> {
    let text = console.prompt("Question text", None)?;

    let mut answers: [String; MC_ANSWER_COUNT] = Default::default();
    for (label, answer) in ('A'..).zip(answers.iter_mut()) {
        *answer = console.prompt(&format!("Option {}", label), None)?;
    }

    let correct = console.prompt("Correct answer (must match one of the above exactly)", None)?;
    let explanation = console.prompt("Explanation", None)?;

    Ok(MultipleChoice {
        text,
        answers,
        correct,
        explanation,
    })
}

fn warn_if_unlisted<R: BufRead, W: Write>(
    question: &Question,
    console: &mut Console<R, W>,
) -> Result<(), QuizGenError> {
    if !question.correct_is_listed() {
        warn!(
            "correct value {:?} is not among the {} choices",
            question.correct(),
            question.kind()
        );
        console.warning(&format!(
            "Warning: correct value '{}' does not match any option; saving anyway.",
            question.correct()
        ))?;
    }
    Ok(())
}
