use chatty::models::{Task, TaskList};
use chrono::NaiveDate;
use speculate2::speculate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn todos(names: &[&str]) -> TaskList {
    names.iter().map(|name| Task::todo(name).expect("valid todo")).collect()
}

fn descriptions(list: &TaskList) -> Vec<String> {
    list.iter().map(|task| task.description().to_string()).collect()
}

speculate! {
    describe "add" {
        it "starts empty" {
            let list = TaskList::new();
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
        }

        it "appends in insertion order and allows duplicates" {
            let mut list = TaskList::new();
            list.add(Task::todo("read").unwrap());
            list.add(Task::todo("write").unwrap());
            list.add(Task::todo("read").unwrap());

            assert_eq!(list.len(), 3);
            assert_eq!(descriptions(&list), vec!["read", "write", "read"]);
        }
    }

    describe "remove" {
        it "shifts later tasks down" {
            let mut list = todos(&["a", "b"]);
            let removed = list.remove(0);

            assert_eq!(removed.description(), "a");
            assert_eq!(list.len(), 1);
            assert_eq!(list.get(0).description(), "b");
        }
    }

    describe "find" {
        it "returns matching tasks in list order" {
            let list = todos(&["read book", "write code", "book flight"]);
            let found = list.find("book");
            assert_eq!(descriptions(&found), vec!["read book", "book flight"]);
        }

        it "is case-sensitive" {
            let list = todos(&["Book club", "read book"]);
            assert_eq!(descriptions(&list.find("book")), vec!["read book"]);
        }

        it "returns an empty list when nothing matches" {
            let list = todos(&["read book"]);
            assert!(list.find("flight").is_empty());
        }

        it "leaves the original list untouched" {
            let list = todos(&["read book", "write code"]);
            let _ = list.find("book");
            assert_eq!(list.len(), 2);
        }
    }

    describe "due_on" {
        before {
            let mut list = TaskList::new();
            list.add(Task::todo("read book").unwrap());
            list.add(Task::deadline("submit report", date(2026, 3, 1)).unwrap());
            list.add(Task::event("conference", date(2026, 3, 1), date(2026, 3, 3)).unwrap());
        }

        it "includes events on both boundary days" {
            assert_eq!(
                descriptions(&list.due_on(date(2026, 3, 1))),
                vec!["submit report", "conference"]
            );
            assert_eq!(descriptions(&list.due_on(date(2026, 3, 2))), vec!["conference"]);
            assert_eq!(descriptions(&list.due_on(date(2026, 3, 3))), vec!["conference"]);
        }

        it "excludes days outside every range" {
            assert!(list.due_on(date(2026, 2, 28)).is_empty());
            assert!(list.due_on(date(2026, 3, 4)).is_empty());
        }

        it "never includes todos" {
            assert!(list.due_on(date(2026, 3, 1)).iter().all(|t| t.description() != "read book"));
        }
    }

    describe "mark_complete and mark_incomplete" {
        before {
            let mut list = todos(&["a", "b", "c"]);
        }

        it "marks each task and returns them in request order" {
            let marked = list.mark_complete(&[2, 0]);

            assert_eq!(descriptions(&marked), vec!["c", "a"]);
            assert!(list.get(0).is_done());
            assert!(!list.get(1).is_done());
            assert!(list.get(2).is_done());
        }

        it "unmarks tasks" {
            list.mark_complete(&[0, 1, 2]);
            let unmarked = list.mark_incomplete(&[1]);

            assert_eq!(descriptions(&unmarked), vec!["b"]);
            assert!(!unmarked.get(0).is_done());
            assert!(list.get(0).is_done());
            assert!(!list.get(1).is_done());
        }
    }

    describe "delete" {
        it "returns deleted tasks in request order" {
            let mut list = todos(&["a", "b", "c"]);
            let deleted = list.delete(&[0, 2]);

            assert_eq!(descriptions(&deleted), vec!["a", "c"]);
            assert_eq!(descriptions(&list), vec!["b"]);
        }

        it "handles descending requests" {
            let mut list = todos(&["a", "b", "c"]);
            let deleted = list.delete(&[2, 0]);

            assert_eq!(descriptions(&deleted), vec!["c", "a"]);
            assert_eq!(descriptions(&list), vec!["b"]);
        }

        it "can empty the list" {
            let mut list = todos(&["a", "b"]);
            list.delete(&[1, 0]);
            assert!(list.is_empty());
        }
    }
}
