//! Console wording for responses and errors.

use std::fmt::Write;

use crate::error::ChattyError;
use crate::models::{TaskList, DISPLAY_DATE_FORMAT};
use crate::session::{LoadFailure, Response};

pub fn welcome() -> String {
    "Hello! I'm Chatty\nWhat can I do for you?\n".to_string()
}

pub fn error(e: &ChattyError) -> String {
    format!("{}\n", e)
}

pub fn load_failure(failure: &LoadFailure) -> String {
    let mut out = error(&failure.error);
    if let Some(backup) = &failure.backup {
        let _ = writeln!(out, "Your saved tasks were copied to {}", backup.display());
    }
    out
}

pub fn render(response: &Response) -> String {
    match response {
        Response::Added { task, total } => format!(
            "Got it. I've added this task:\n{}\nNow you have {} task(s) in the list.\n",
            task, total
        ),
        Response::Marked(tasks) => {
            format!("Nice! I've marked this task as done:\n{}", numbered(tasks))
        }
        Response::Unmarked(tasks) => format!(
            "OK, I've marked this task as not done yet:\n{}",
            numbered(tasks)
        ),
        Response::Deleted { tasks, remaining } => format!(
            "Noted. I've removed this task:\n{}Now you have {} task(s) left in the list.\n",
            numbered(tasks),
            remaining
        ),
        Response::Listed(tasks) => {
            format!("Here are the tasks in your list:\n{}", numbered(tasks))
        }
        Response::Due { tasks, .. } if tasks.is_empty() => {
            "There are no tasks relevant to this date!\n".to_string()
        }
        Response::Due { date, tasks } => format!(
            "Here are the tasks relevant to {}\n{}",
            date.format(DISPLAY_DATE_FORMAT),
            numbered(tasks)
        ),
        Response::Found(tasks) if tasks.is_empty() => {
            "There are no tasks in your list that match this description.\n".to_string()
        }
        Response::Found(tasks) => format!(
            "Here are the matching tasks in your list:\n{}",
            numbered(tasks)
        ),
        Response::Bye => "Bye. Hope to see you again!\n".to_string(),
    }
}

/// `1. [T][ ] ...` per task, each line newline-terminated.
fn numbered(tasks: &TaskList) -> String {
    let mut out = String::new();
    for (i, task) in tasks.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, task);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use chrono::NaiveDate;

    #[test]
    fn test_render_added() {
        let response = Response::Added {
            task: Task::todo("read book").unwrap(),
            total: 1,
        };
        assert_eq!(
            render(&response),
            "Got it. I've added this task:\n[T][ ] read book\nNow you have 1 task(s) in the list.\n"
        );
    }

    #[test]
    fn test_render_list() {
        let tasks: TaskList = vec![
            Task::todo("read book").unwrap(),
            Task::deadline("submit report", NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            render(&Response::Listed(tasks)),
            "Here are the tasks in your list:\n1. [T][ ] read book\n2. [D][ ] submit report (by: Mar 01 2026)\n"
        );
    }

    #[test]
    fn test_render_empty_queries() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(
            render(&Response::Due {
                date,
                tasks: TaskList::new()
            }),
            "There are no tasks relevant to this date!\n"
        );
        assert_eq!(
            render(&Response::Found(TaskList::new())),
            "There are no tasks in your list that match this description.\n"
        );
    }

    #[test]
    fn test_render_load_failure() {
        let failure = LoadFailure {
            error: ChattyError::InvalidDateFormat,
            backup: Some("data/chatty.txt.bak".into()),
        };
        assert_eq!(
            load_failure(&failure),
            "Invalid date format. Dates should be formatted as yyyy-mm-dd\n\
             Your saved tasks were copied to data/chatty.txt.bak\n"
        );
    }

    #[test]
    fn test_render_error() {
        assert_eq!(error(&ChattyError::InvalidTaskNumber), "Invalid task number!\n");
    }
}
