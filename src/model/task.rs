use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Serializes as `{"id": <number>, "text": <string>, "completed": <bool>}`,
/// which is also the on-disk format under the `todos` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique integer id, strictly monotonic within a list.
    pub id: u64,
    /// Task text. Non-empty and trimmed after insertion.
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// View predicate selecting which tasks are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Parse a filter name as used by the CLI and the tab labels.
    pub fn parse(s: &str) -> Option<Filter> {
        match s {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" => Some(Filter::Completed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Whether a task passes this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// The next filter in tab-cycle order.
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }
}

/// The list a fresh store starts from when nothing was persisted.
pub fn seed_tasks() -> Vec<Task> {
    let mut course = Task::new(1, "Complete online JavaScript course");
    course.completed = true;
    vec![
        course,
        Task::new(2, "Jog around the park 3x"),
        Task::new(3, "10 minutes meditation"),
        Task::new(4, "Read for 1 hour"),
        Task::new(5, "Pick up groceries"),
        Task::new(6, "Ship the side project"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parse_round_trips_labels() {
        for f in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(Filter::parse(f.label()), Some(f));
        }
        assert_eq!(Filter::parse("done"), None);
    }

    #[test]
    fn seed_has_six_tasks_one_completed() {
        let seed = seed_tasks();
        assert_eq!(seed.len(), 6);
        assert_eq!(seed.iter().filter(|t| t.completed).count(), 1);
        assert_eq!(seed[0].text, "Complete online JavaScript course");
        assert!(seed[0].completed);
    }

    #[test]
    fn task_serde_shape() {
        let task = Task::new(7, "Buy milk");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "text": "Buy milk", "completed": false})
        );
    }
}
