mod question;

pub use question::{
    MultipleChoice, OPTION_LABELS, Question, QuestionKind, SameLetterMc, UnknownKind,
};
