//! Turns one line of user input into a typed [`Command`].
//!
//! Grammar (the command word is case-insensitive):
//!
//! ```text
//! todo <description>
//! deadline <description> /by <yyyy-mm-dd>
//! event <description> /from <yyyy-mm-dd> /to <yyyy-mm-dd>
//! mark|unmark|delete <n> [n ...]
//! find <keyword>
//! due <yyyy-mm-dd>
//! list
//! bye
//! ```
//!
//! Parsing has no side effects. Task numbers are checked against the list
//! length passed in, so every index in a returned command is valid for the
//! list as it stood when the line was parsed.

use chrono::NaiveDate;

use crate::error::{ChattyError, Result};
use crate::models::Task;

/// Date pattern accepted on the command line.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

const BY_MARKER: &str = "/by";
const FROM_MARKER: &str = "/from";
const TO_MARKER: &str = "/to";

/// The leading word of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandWord {
    Todo,
    Deadline,
    Event,
    Mark,
    Unmark,
    Delete,
    List,
    Bye,
    Due,
    Find,
    Unknown,
}

impl CommandWord {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Delete => "delete",
            Self::List => "list",
            Self::Bye => "bye",
            Self::Due => "due",
            Self::Find => "find",
            Self::Unknown => "unknown",
        }
    }

    /// Classify a single word, ignoring case. Anything unrecognised is `Unknown`.
    pub fn from_word(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "todo" => Self::Todo,
            "deadline" => Self::Deadline,
            "event" => Self::Event,
            "mark" => Self::Mark,
            "unmark" => Self::Unmark,
            "delete" => Self::Delete,
            "list" => Self::List,
            "bye" => Self::Bye,
            "due" => Self::Due,
            "find" => Self::Find,
            _ => Self::Unknown,
        }
    }

    /// Classify the first whitespace-delimited word of `input`.
    pub fn of_line(input: &str) -> Self {
        let (word, _) = split_command(input.trim());
        Self::from_word(word)
    }
}

/// A fully validated command. Indices are 0-based and distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    Mark(Vec<usize>),
    Unmark(Vec<usize>),
    Delete(Vec<usize>),
    List,
    Due(NaiveDate),
    Find(String),
    Bye,
}

impl Command {
    /// Whether running this command changes the task list.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Mark(_) | Self::Unmark(_) | Self::Delete(_)
        )
    }
}

/// Parse one line against a task list currently holding `list_len` tasks.
pub fn parse(input: &str, list_len: usize) -> Result<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ChattyError::EmptyCommand);
    }

    let (word, rest) = split_command(input);
    match CommandWord::from_word(word) {
        CommandWord::Todo => parse_todo(rest).map(Command::Add),
        CommandWord::Deadline => parse_deadline(rest).map(Command::Add),
        CommandWord::Event => parse_event(rest).map(Command::Add),
        CommandWord::Mark => parse_task_numbers(rest, list_len).map(Command::Mark),
        CommandWord::Unmark => parse_task_numbers(rest, list_len).map(Command::Unmark),
        CommandWord::Delete => parse_task_numbers(rest, list_len).map(Command::Delete),
        CommandWord::Find => parse_keyword(rest).map(Command::Find),
        CommandWord::Due => parse_due(rest).map(Command::Due),
        CommandWord::List => Ok(Command::List),
        CommandWord::Bye => Ok(Command::Bye),
        CommandWord::Unknown => Err(ChattyError::UnknownCommand),
    }
}

/// Parse a `yyyy-mm-dd` date as typed by the user.
pub fn parse_input_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), INPUT_DATE_FORMAT)
        .map_err(|_| ChattyError::InvalidDateFormat)
}

/// Split off the command word; the remainder comes back trimmed.
fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn empty_description(word: CommandWord) -> ChattyError {
    ChattyError::EmptyDescription(word.as_str().to_string())
}

fn parse_todo(rest: &str) -> Result<Task> {
    if rest.is_empty() {
        return Err(empty_description(CommandWord::Todo));
    }
    Task::todo(rest)
}

fn parse_deadline(rest: &str) -> Result<Task> {
    if rest.is_empty() {
        return Err(empty_description(CommandWord::Deadline));
    }
    let (description, date) = rest
        .split_once(BY_MARKER)
        .ok_or(ChattyError::InvalidDeadlineFormat)?;
    let by = parse_input_date(date)?;
    Task::deadline(description, by)
}

fn parse_event(rest: &str) -> Result<Task> {
    if rest.is_empty() {
        return Err(empty_description(CommandWord::Event));
    }
    let (from_at, to_at) = match (rest.find(FROM_MARKER), rest.find(TO_MARKER)) {
        (Some(from_at), Some(to_at)) if from_at < to_at => (from_at, to_at),
        _ => return Err(ChattyError::InvalidEventFormat),
    };

    let description = rest[..from_at].trim();
    let from = rest[from_at + FROM_MARKER.len()..to_at].trim();
    let to = rest[to_at + TO_MARKER.len()..].trim();
    if description.is_empty() || from.is_empty() || to.is_empty() {
        return Err(ChattyError::EmptyEventFields);
    }

    Task::event(description, parse_input_date(from)?, parse_input_date(to)?)
}

/// Parse 1-based task numbers into distinct 0-based indices, keeping the
/// order of first appearance.
fn parse_task_numbers(rest: &str, list_len: usize) -> Result<Vec<usize>> {
    if rest.is_empty() {
        return Err(ChattyError::MissingTaskNumber);
    }

    let mut indices = Vec::new();
    for token in rest.split_whitespace() {
        let number: i64 = token
            .parse()
            .map_err(|_| ChattyError::NonIntegerTaskNumber)?;
        let index = usize::try_from(number)
            .ok()
            .filter(|n| (1..=list_len).contains(n))
            .ok_or(ChattyError::InvalidTaskNumber)?
            - 1;
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    Ok(indices)
}

fn parse_keyword(rest: &str) -> Result<String> {
    if rest.is_empty() {
        return Err(ChattyError::EmptyDescription("find command".to_string()));
    }
    Ok(rest.to_string())
}

fn parse_due(rest: &str) -> Result<NaiveDate> {
    if rest.is_empty() {
        return Err(empty_description(CommandWord::Due));
    }
    parse_input_date(rest)
}
