use crate::model::task::{Filter, Task, seed_tasks};

/// In-memory ordered collection of tasks plus its mutation operations.
///
/// The store itself has no side effects; callers (TUI controller, CLI
/// handlers) persist after every mutating call. Operations that reference
/// an unknown id are silent no-ops and report `false`.
#[derive(Debug, Clone)]
pub struct Store {
    tasks: Vec<Task>,
}

impl Store {
    pub fn new(tasks: Vec<Task>) -> Self {
        Store { tasks }
    }

    /// A store holding the fixed seed list.
    pub fn seeded() -> Self {
        Store::new(seed_tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a task to the front of the list. Whitespace-only text is
    /// rejected without mutating. Returns the assigned id.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.tasks.insert(0, Task::new(id, text));
        Some(id)
    }

    /// Flip the completed flag of the task with the given id.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the task with the given id.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Remove every completed task, keeping the rest in order.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Move the task `moved` to the position `target` occupied before the
    /// move. Both indices are captured first, then the moved task is
    /// spliced out and reinserted at the captured index, so moving a task
    /// downward lands just after the target. No-op when the ids are equal
    /// or either is missing.
    pub fn reorder(&mut self, moved: u64, target: u64) -> bool {
        if moved == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(moved), self.position(target)) else {
            return false;
        };
        let task = self.tasks.remove(from);
        self.tasks.insert(to.min(self.tasks.len()), task);
        true
    }

    /// Place the task with the given id at an absolute index (clamped to
    /// the list length). Used to restore a cancelled move.
    pub fn move_to_index(&mut self, id: u64, index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let task = self.tasks.remove(from);
        self.tasks.insert(index.min(self.tasks.len()), task);
        true
    }

    /// Number of tasks not yet completed.
    pub fn count_active(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Tasks passing the filter, in store order.
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Index of the task with the given id in the full list.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(store: &Store) -> Vec<u64> {
        store.tasks().iter().map(|t| t.id).collect()
    }

    #[test]
    fn add_rejects_empty_and_whitespace() {
        let mut store = Store::seeded();
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add("\t\n"), None);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn add_prepends_trimmed_incomplete_task() {
        let mut store = Store::seeded();
        let id = store.add("  Buy milk  ").unwrap();
        assert_eq!(store.len(), 7);
        let first = &store.tasks()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.text, "Buy milk");
        assert!(!first.completed);
    }

    #[test]
    fn ids_are_strictly_monotonic() {
        let mut store = Store::new(Vec::new());
        let a = store.add("one").unwrap();
        let b = store.add("two").unwrap();
        let c = store.add("three").unwrap();
        assert!(a < b && b < c);

        // Deleting a non-maximal id never frees it for reuse.
        store.delete(b);
        let d = store.add("four").unwrap();
        assert!(d > c);
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let mut store = Store::seeded();
        let snapshot: Vec<bool> = store.tasks().iter().map(|t| t.completed).collect();
        assert!(store.toggle(2));
        for (i, task) in store.tasks().iter().enumerate() {
            if task.id == 2 {
                assert_ne!(task.completed, snapshot[i]);
            } else {
                assert_eq!(task.completed, snapshot[i]);
            }
        }
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let mut store = Store::seeded();
        let original = store.clone();
        store.toggle(3);
        store.toggle(3);
        assert_eq!(store.tasks(), original.tasks());
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = Store::seeded();
        let original = store.clone();
        assert!(!store.toggle(999));
        assert_eq!(store.tasks(), original.tasks());
    }

    #[test]
    fn delete_removes_exactly_one_task() {
        let mut store = Store::seeded();
        assert!(store.delete(4));
        assert_eq!(store.len(), 5);
        assert!(store.get(4).is_none());

        assert!(!store.delete(4));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn clear_completed_keeps_active_order() {
        let mut store = Store::seeded();
        store.toggle(3);
        store.toggle(5);
        let removed = store.clear_completed();
        assert_eq!(removed, 3); // seed task 1 plus the two toggled
        assert!(store.tasks().iter().all(|t| !t.completed));
        assert_eq!(ids(&store), vec![2, 4, 6]);
    }

    #[test]
    fn filtered_respects_predicate_and_order() {
        let store = Store::seeded();
        let active = store.filtered(Filter::Active);
        assert!(active.iter().all(|t| !t.completed));
        assert_eq!(active.len(), 5);

        let completed = store.filtered(Filter::Completed);
        assert!(completed.iter().all(|t| t.completed));
        assert_eq!(completed.len(), 1);

        let all = store.filtered(Filter::All);
        let all_ids: Vec<u64> = all.iter().map(|t| t.id).collect();
        assert_eq!(all_ids, ids(&store));
    }

    #[test]
    fn reorder_moving_down_lands_after_target() {
        // Both indices are captured before the splice, so a downward move
        // lands after the target.
        let mut store = Store::new(vec![
            Task::new(1, "a"),
            Task::new(2, "b"),
            Task::new(3, "c"),
        ]);
        assert!(store.reorder(1, 3));
        assert_eq!(ids(&store), vec![2, 3, 1]);
    }

    #[test]
    fn reorder_moving_up_lands_at_target() {
        let mut store = Store::new(vec![
            Task::new(1, "a"),
            Task::new(2, "b"),
            Task::new(3, "c"),
        ]);
        assert!(store.reorder(3, 1));
        assert_eq!(ids(&store), vec![3, 1, 2]);
    }

    #[test]
    fn reorder_preserves_id_set() {
        let mut store = Store::seeded();
        let mut before = ids(&store);
        store.reorder(2, 6);
        let mut after = ids(&store);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn reorder_no_op_cases() {
        let mut store = Store::seeded();
        let original = ids(&store);
        assert!(!store.reorder(2, 2));
        assert!(!store.reorder(2, 999));
        assert!(!store.reorder(999, 2));
        assert_eq!(ids(&store), original);
    }

    #[test]
    fn move_to_index_clamps() {
        let mut store = Store::new(vec![
            Task::new(1, "a"),
            Task::new(2, "b"),
            Task::new(3, "c"),
        ]);
        assert!(store.move_to_index(1, 99));
        assert_eq!(ids(&store), vec![2, 3, 1]);
        assert!(store.move_to_index(1, 0));
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert!(!store.move_to_index(42, 0));
    }

    #[test]
    fn seed_scenario_end_to_end() {
        let mut store = Store::seeded();
        assert_eq!(store.count_active(), 5);

        let completed = store.filtered(Filter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "Complete online JavaScript course");

        store.add("Test task").unwrap();
        let active = store.filtered(Filter::Active);
        assert_eq!(active[0].text, "Test task");
        assert_eq!(store.count_active(), 6);
    }
}
