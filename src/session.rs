//! Applies parsed commands to the task list and keeps the data file in step.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{ChattyError, Result};
use crate::models::{Task, TaskList};
use crate::parser::{self, Command};
use crate::storage::Storage;

/// What a command produced. Rendering is left to [`crate::ui`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Added { task: Task, total: usize },
    Marked(TaskList),
    Unmarked(TaskList),
    Deleted { tasks: TaskList, remaining: usize },
    Listed(TaskList),
    Due { date: NaiveDate, tasks: TaskList },
    Found(TaskList),
    Bye,
}

/// Why a session started empty, and where the unreadable file was copied.
#[derive(Debug)]
pub struct LoadFailure {
    pub error: ChattyError,
    pub backup: Option<PathBuf>,
}

/// A running conversation: the live task list plus where it is persisted.
pub struct Session {
    tasks: TaskList,
    storage: Storage,
}

impl Session {
    pub fn new(tasks: TaskList, storage: Storage) -> Self {
        Self { tasks, storage }
    }

    /// Start from whatever `storage` holds.
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = storage.load()?;
        Ok(Self::new(tasks, storage))
    }

    /// Like [`Session::open`], but an unreadable data file does not stop the
    /// session. The file is copied aside before the empty list can overwrite it.
    pub fn open_or_recover(storage: Storage) -> (Self, Option<LoadFailure>) {
        let error = match storage.load() {
            Ok(tasks) => return (Self::new(tasks, storage), None),
            Err(e) => e,
        };
        tracing::warn!("Could not load {}: {}", storage.path().display(), error);

        let backup = match storage.back_up() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Could not back up {}: {}", storage.path().display(), e);
                None
            }
        };
        (Self::new(TaskList::new(), storage), Some(LoadFailure { error, backup }))
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Parse and run one line of input.
    ///
    /// Mutating commands save the full list afterwards. If that save fails the
    /// error is returned but the in-memory change stays.
    pub fn execute(&mut self, input: &str) -> Result<Response> {
        let command = parser::parse(input, self.tasks.len())?;
        let mutating = command.is_mutating();
        let response = self.apply(command);

        if mutating {
            if let Err(e) = self.storage.save(&self.tasks) {
                tracing::warn!("Failed to save tasks to {}: {}", self.storage.path().display(), e);
                return Err(e);
            }
        }
        Ok(response)
    }

    fn apply(&mut self, command: Command) -> Response {
        match command {
            Command::Add(task) => {
                self.tasks.add(task.clone());
                Response::Added {
                    task,
                    total: self.tasks.len(),
                }
            }
            Command::Mark(indices) => Response::Marked(self.tasks.mark_complete(&indices)),
            Command::Unmark(indices) => Response::Unmarked(self.tasks.mark_incomplete(&indices)),
            Command::Delete(indices) => {
                let tasks = self.tasks.delete(&indices);
                Response::Deleted {
                    tasks,
                    remaining: self.tasks.len(),
                }
            }
            Command::List => Response::Listed(self.tasks.clone()),
            Command::Due(date) => Response::Due {
                date,
                tasks: self.tasks.due_on(date),
            },
            Command::Find(keyword) => Response::Found(self.tasks.find(&keyword)),
            Command::Bye => Response::Bye,
        }
    }
}
