use thiserror::Error;

/// Recoverable failures surfaced to the user.
///
/// None of these end a session: the read loop shows the message and moves on
/// to the next line.
#[derive(Debug, Error)]
pub enum ChattyError {
    #[error("Please type a command!")]
    EmptyCommand,

    #[error("Sorry, I don't know what that means!")]
    UnknownCommand,

    #[error("Please specify the task number after the command.")]
    MissingTaskNumber,

    #[error("Please enter a valid integer for the task number.")]
    NonIntegerTaskNumber,

    #[error("Invalid task number!")]
    InvalidTaskNumber,

    /// Carries the command word (or phrase) the description was missing after.
    #[error("Oops! The description after a {0} cannot be empty.")]
    EmptyDescription(String),

    #[error("Invalid format. Use: deadline <description> /by <date>")]
    InvalidDeadlineFormat,

    #[error("Invalid format. Correct usage: event <name> /from <start> /to <end>")]
    InvalidEventFormat,

    #[error("Event name, start time, and end time cannot be empty.")]
    EmptyEventFields,

    #[error("Invalid date format. Dates should be formatted as yyyy-mm-dd")]
    InvalidDateFormat,

    /// A stored line whose type tag, status mark or date markers are missing.
    #[error("Saved task on line {line} could not be read: {content}")]
    CorruptRecord { line: usize, content: String },

    #[error("Something went wrong: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChattyError>;
