mod writer;

pub use writer::{DEFAULT_OUTPUT_PATH, WriteError, write_questions};
