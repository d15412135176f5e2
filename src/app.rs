use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::QuizGenError;
use crate::builders;
use crate::data::{DEFAULT_OUTPUT_PATH, write_questions};
use crate::models::{Question, QuestionKind};
use crate::terminal::Console;

pub const BANNER: &str = "Quiz Question JSON Generator";

/// Defaults offered at the type and file-name prompts.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_kind: QuestionKind,
    pub default_output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_kind: QuestionKind::SameLetterMc,
            default_output: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

/// Questions collected during one run, in creation order.
#[derive(Debug, Default)]
pub struct Session {
    questions: Vec<Question>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectingType,
    Building(QuestionKind),
    AskContinue,
    Done,
}

/// Outcome of saving a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub count: usize,
    pub path: PathBuf,
}

pub struct App<R, W> {
    pub stage: Stage,
    console: Console<R, W>,
    session: Session,
    settings: Settings,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(console: Console<R, W>, settings: Settings) -> Self {
        Self {
            stage: Stage::SelectingType,
            console,
            session: Session::new(),
            settings,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Advance the session by one stage.
    pub fn step(&mut self) -> Result<(), QuizGenError> {
        let next = match self.stage {
            Stage::SelectingType => self.select_type()?,
            Stage::Building(kind) => {
                let question = builders::build(kind, &mut self.console)?;
                self.session.push(question);
                debug!("Appended {} question, session has {}", kind, self.session.len());
                Stage::AskContinue
            }
            Stage::AskContinue => self.ask_continue()?,
            Stage::Done => Stage::Done,
        };

        if next != self.stage {
            debug!("Stage {:?} -> {:?}", self.stage, next);
        }
        self.stage = next;
        Ok(())
    }

    /// Collect questions until the user declines to add another.
    pub fn collect(&mut self) -> Result<(), QuizGenError> {
        self.console.banner(BANNER)?;
        while self.stage != Stage::Done {
            self.step()?;
        }
        Ok(())
    }

    /// Ask for the destination and write the session there.
    pub fn finish(&mut self) -> Result<SaveReport, QuizGenError> {
        let path = self
            .console
            .prompt("Output JSON file name", Some(self.settings.default_output.as_str()))?;

        let count = write_questions(self.session.questions(), &path)?;
        self.console
            .success(&format!("Saved {} questions to {}", count, path))?;
        info!("Session saved: {} questions", count);

        Ok(SaveReport {
            count,
            path: PathBuf::from(path),
        })
    }

    /// Run a whole session: collect, then save.
    pub fn run(mut self) -> Result<SaveReport, QuizGenError> {
        self.collect()?;
        self.finish()
    }

    fn select_type(&mut self) -> Result<Stage, QuizGenError> {
        self.console
            .notice(format_args!("\nSupported types: {}", QuestionKind::supported_list()))?;
        let answer = self
            .console
            .prompt("Question type", Some(self.settings.default_kind.tag()))?;

        match answer.parse::<QuestionKind>() {
            Ok(kind) => Ok(Stage::Building(kind)),
            Err(e) => {
                debug!("{}", e);
                self.console.error("Unsupported type. Try again.")?;
                Ok(Stage::SelectingType)
            }
        }
    }

    fn ask_continue(&mut self) -> Result<Stage, QuizGenError> {
        let answer = self.console.prompt("Add another question? (y/n)", Some("y"))?;
        if answer.to_lowercase() == "y" {
            Ok(Stage::SelectingType)
        } else {
            Ok(Stage::Done)
        }
    }
}
