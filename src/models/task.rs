use std::fmt;

use chrono::NaiveDate;

use crate::error::{ChattyError, Result};

/// Date pattern used wherever a date is shown or stored, e.g. `Mar 01 2026`.
///
/// Differs from the `yyyy-mm-dd` form typed on the command line.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d %Y";

/// A unit of work tracked by the assistant.
///
/// The kind and its dates are fixed at construction; only the completion flag
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

/// Per-variant payload of a task.
///
/// - `Todo`: no date
/// - `Deadline`: due on a single day
/// - `Event`: spans `from..=to`; `from <= to` is not checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// Single-letter tag written between brackets, e.g. `[D]`.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }

    /// The command word that creates this kind of task.
    pub fn command_word(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline { .. } => "deadline",
            Self::Event { .. } => "event",
        }
    }
}

impl Task {
    /// Build a task, trimming the description and folding line breaks into
    /// spaces so it always fits on one stored line.
    ///
    /// An empty description is rejected with the command word of `kind`.
    pub fn new(description: impl AsRef<str>, kind: TaskKind) -> Result<Self> {
        let description = description.as_ref().replace(['\r', '\n'], " ");
        let description = description.trim();
        if description.is_empty() {
            return Err(ChattyError::EmptyDescription(kind.command_word().to_string()));
        }
        Ok(Self {
            description: description.to_string(),
            done: false,
            kind,
        })
    }

    pub fn todo(description: impl AsRef<str>) -> Result<Self> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl AsRef<str>, by: NaiveDate) -> Result<Self> {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl AsRef<str>, from: NaiveDate, to: NaiveDate) -> Result<Self> {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// `X` when complete, a single space otherwise.
    pub fn status_mark(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    /// Whether this task is relevant to `date`.
    ///
    /// To-dos never are. Deadlines match their exact day; events match every
    /// day from start to end, both ends included.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { by } => by == date,
            TaskKind::Event { from, to } => from <= date && date <= to,
        }
    }
}

/// Renders `[T][X] description` followed by the variant's date suffix.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_mark(),
            self.description
        )?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => {
                write!(f, " (by: {})", by.format(DISPLAY_DATE_FORMAT))
            }
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                from.format(DISPLAY_DATE_FORMAT),
                to.format(DISPLAY_DATE_FORMAT)
            ),
        }
    }
}
