use std::collections::HashMap;

use chrono::NaiveDate;

use super::Task;

/// Ordered, index-addressed collection of tasks.
///
/// Indices here are 0-based. User-facing 1-based numbers are converted and
/// range-checked by the parser before they reach this type, so an out-of-range
/// index is a bug and panics.
///
/// Query and bulk operations return a new `TaskList` holding copies of the
/// affected tasks, in the order the caller asked for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> &Task {
        assert!(index < self.tasks.len(), "task index {index} out of bounds");
        &self.tasks[index]
    }

    pub fn remove(&mut self, index: usize) -> Task {
        assert!(index < self.tasks.len(), "task index {index} out of bounds");
        self.tasks.remove(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks whose description contains `keyword` (case-sensitive substring).
    pub fn find(&self, keyword: &str) -> TaskList {
        self.filtered(|task| task.description().contains(keyword))
    }

    /// Tasks relevant to `date`; see [`Task::occurs_on`].
    pub fn due_on(&self, date: NaiveDate) -> TaskList {
        self.filtered(|task| task.occurs_on(date))
    }

    pub fn mark_complete(&mut self, indices: &[usize]) -> TaskList {
        self.update_each(indices, Task::mark_done)
    }

    pub fn mark_incomplete(&mut self, indices: &[usize]) -> TaskList {
        self.update_each(indices, Task::mark_undone)
    }

    /// Remove every task at `indices`, returning them in request order.
    ///
    /// Removal runs from the highest index down so earlier removals never
    /// shift a position that is still pending. Repeated indices remove once.
    pub fn delete(&mut self, indices: &[usize]) -> TaskList {
        let mut descending = indices.to_vec();
        descending.sort_unstable_by(|a, b| b.cmp(a));
        descending.dedup();

        let mut removed: HashMap<usize, Task> = descending
            .into_iter()
            .map(|index| (index, self.remove(index)))
            .collect();

        indices
            .iter()
            .filter_map(|index| removed.remove(index))
            .collect()
    }

    fn filtered(&self, keep: impl Fn(&Task) -> bool) -> TaskList {
        self.tasks.iter().filter(|task| keep(task)).cloned().collect()
    }

    fn update_each(&mut self, indices: &[usize], update: fn(&mut Task)) -> TaskList {
        let mut affected = TaskList::new();
        for &index in indices {
            assert!(index < self.tasks.len(), "task index {index} out of bounds");
            let task = &mut self.tasks[index];
            update(task);
            affected.add(task.clone());
        }
        affected
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl IntoIterator for TaskList {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todos(names: &[&str]) -> TaskList {
        names.iter().map(|name| Task::todo(name).unwrap()).collect()
    }

    fn descriptions(list: &TaskList) -> Vec<&str> {
        list.iter().map(Task::description).collect()
    }

    #[test]
    fn test_delete_returns_request_order() {
        let mut list = todos(&["a", "b", "c"]);
        let deleted = list.delete(&[0, 2]);
        assert_eq!(descriptions(&deleted), vec!["a", "c"]);
        assert_eq!(descriptions(&list), vec!["b"]);
    }

    #[test]
    fn test_delete_unsorted_request() {
        let mut list = todos(&["a", "b", "c", "d"]);
        let deleted = list.delete(&[3, 0, 1]);
        assert_eq!(descriptions(&deleted), vec!["d", "a", "b"]);
        assert_eq!(descriptions(&list), vec!["c"]);
    }

    #[test]
    fn test_delete_repeated_index_removes_once() {
        let mut list = todos(&["a", "b", "c"]);
        let deleted = list.delete(&[1, 1]);
        assert_eq!(descriptions(&deleted), vec!["b"]);
        assert_eq!(descriptions(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_mark_returns_affected_in_request_order() {
        let mut list = todos(&["a", "b", "c"]);
        let marked = list.mark_complete(&[2, 0]);
        assert_eq!(descriptions(&marked), vec!["c", "a"]);
        assert!(marked.iter().all(Task::is_done));
        assert!(list.get(0).is_done());
        assert!(!list.get(1).is_done());
        assert!(list.get(2).is_done());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_range_panics() {
        let list = todos(&["a"]);
        list.get(1);
    }
}
