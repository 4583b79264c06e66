use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub filter: &'static str,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct CountJson {
    pub active: usize,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub dark: bool,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        completed: task.completed,
    }
}

/// Plain one-line rendering: `[x] 3 Read for 1 hour`
pub fn task_line(task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    format!("{} {} {}", checkbox, task.id, task.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_line_shows_checkbox_id_and_text() {
        let mut task = Task::new(3, "Read for 1 hour");
        assert_eq!(task_line(&task), "[ ] 3 Read for 1 hour");
        task.completed = true;
        assert_eq!(task_line(&task), "[x] 3 Read for 1 hour");
    }
}
