//! Line format for the data file.
//!
//! Each task is one line, numbered from 1 in list order:
//!
//! ```text
//! 1. [T][ ] read book
//! 2. [D][X] submit report (by: Mar 01 2026)
//! 3. [E][ ] conference (from: Mar 01 2026 to: Mar 03 2026)
//! ```
//!
//! The record after the ordinal is the task's `Display` form. There is no
//! escaping: a deadline or event description containing `(` or one of the
//! date markers will not read back as written.

use chrono::NaiveDate;

use crate::error::{ChattyError, Result};
use crate::models::{Task, TaskList, DISPLAY_DATE_FORMAT};

/// `[T][ ] ` - type tag, status mark and the separating space.
const HEADER_LEN: usize = 7;

const BY_MARKER: &str = "(by: ";
const FROM_MARKER: &str = "from: ";
const FROM_END_MARKER: &str = " to:";
const TO_MARKER: &str = "to: ";

pub fn encode_line(ordinal: usize, task: &Task) -> String {
    format!("{}. {}", ordinal, task)
}

/// Encode the whole list, one newline-terminated line per task.
pub fn encode(tasks: &TaskList) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| encode_line(i + 1, task) + "\n")
        .collect()
}

/// Decode a single stored line. The ordinal prefix is optional.
pub fn decode_line(text: &str) -> Result<Task> {
    decode_record(1, text)
}

/// Decode a whole data file, skipping blank lines.
pub fn decode(contents: &str) -> Result<TaskList> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| decode_record(i + 1, line))
        .collect()
}

fn decode_record(line: usize, text: &str) -> Result<Task> {
    let corrupt = || ChattyError::CorruptRecord {
        line,
        content: text.to_string(),
    };

    let record = strip_ordinal(text.trim_end());
    let header = record.get(..HEADER_LEN).ok_or_else(corrupt)?.as_bytes();
    if header[0] != b'[' || header[2] != b']' || header[3] != b'[' || header[5] != b']' {
        return Err(corrupt());
    }
    let done = match header[4] {
        b'X' => true,
        b' ' => false,
        _ => return Err(corrupt()),
    };
    let body = &record[HEADER_LEN..];

    let mut task = match header[1] {
        b'T' => Task::todo(body).map_err(|_| corrupt())?,
        b'D' => {
            let description = description_before_suffix(body).ok_or_else(corrupt)?;
            let by = between(body, BY_MARKER, None).ok_or_else(corrupt)?;
            Task::deadline(description, parse_stored_date(by)?).map_err(|_| corrupt())?
        }
        b'E' => {
            let description = description_before_suffix(body).ok_or_else(corrupt)?;
            let from = between(body, FROM_MARKER, Some(FROM_END_MARKER)).ok_or_else(corrupt)?;
            let to = between(body, TO_MARKER, None).ok_or_else(corrupt)?;
            Task::event(description, parse_stored_date(from)?, parse_stored_date(to)?)
                .map_err(|_| corrupt())?
        }
        _ => return Err(corrupt()),
    };

    if done {
        task.mark_done();
    }
    Ok(task)
}

/// Drop a leading `<digits>. ` if present.
fn strip_ordinal(text: &str) -> &str {
    let digits = text.len() - text.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return text;
    }
    text[digits..].strip_prefix(". ").unwrap_or(text)
}

/// Text up to the first `(`.
fn description_before_suffix(body: &str) -> Option<&str> {
    body.find('(').map(|open| &body[..open])
}

/// Text after the first `start`, up to the first `end` or, when `end` is
/// `None`, up to the closing `)` that ends the line.
fn between<'a>(body: &'a str, start: &str, end: Option<&str>) -> Option<&'a str> {
    let begin = body.find(start)? + start.len();
    let finish = match end {
        Some(end) => body.find(end)?,
        None => body.strip_suffix(')')?.len(),
    };
    body.get(begin..finish).map(str::trim)
}

fn parse_stored_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DISPLAY_DATE_FORMAT).map_err(|_| ChattyError::InvalidDateFormat)
}
