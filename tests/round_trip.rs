//! Persistence round-trip tests against the real file-backed store.

use tempfile::TempDir;

use tick::io::storage::{self, DirStore, Kv, TASKS_KEY};
use tick::model::task::{Task, seed_tasks};

fn open_store(dir: &TempDir) -> DirStore {
    DirStore::open(dir.path()).unwrap()
}

#[test]
fn save_then_load_reconstructs_any_valid_sequence() {
    let cases: Vec<Vec<Task>> = vec![
        Vec::new(),
        seed_tasks(),
        vec![Task::new(1, "just one")],
        vec![
            Task {
                id: 10,
                text: "caf\u{00E9} \u{65E5}\u{672C}\u{8A9E} \"quoted\" \\slash".into(),
                completed: true,
            },
            Task::new(11, "plain"),
        ],
    ];

    for tasks in cases {
        let dir = TempDir::new().unwrap();
        let kv = open_store(&dir);
        storage::save_tasks(&kv, &tasks).unwrap();
        let loaded = storage::load_tasks(&kv).unwrap().unwrap();
        assert_eq!(loaded, tasks);
    }
}

#[test]
fn hand_written_json_in_the_documented_layout_loads() {
    let dir = TempDir::new().unwrap();
    let kv = open_store(&dir);
    kv.write(
        TASKS_KEY,
        br#"[{"id": 3, "text": "from another writer", "completed": true}]"#,
    )
    .unwrap();

    let loaded = storage::load_tasks(&kv).unwrap().unwrap();
    assert_eq!(
        loaded,
        vec![Task {
            id: 3,
            text: "from another writer".into(),
            completed: true,
        }]
    );
}

#[test]
fn theme_flag_round_trips_through_files() {
    let dir = TempDir::new().unwrap();
    let kv = open_store(&dir);

    assert!(!storage::load_theme(&kv));
    storage::save_theme(&kv, true).unwrap();
    assert!(storage::load_theme(&kv));

    // A second handle over the same directory sees the same flag.
    let kv2 = open_store(&dir);
    assert!(storage::load_theme(&kv2));

    storage::save_theme(&kv2, false).unwrap();
    assert!(!storage::load_theme(&kv));
}

#[test]
fn repeated_saves_keep_a_single_parseable_file() {
    let dir = TempDir::new().unwrap();
    let kv = open_store(&dir);

    let mut tasks = seed_tasks();
    for i in 0..5 {
        tasks.insert(0, Task::new(100 + i, format!("extra {}", i)));
        storage::save_tasks(&kv, &tasks).unwrap();
    }

    let loaded = storage::load_tasks(&kv).unwrap().unwrap();
    assert_eq!(loaded, tasks);

    // Atomic writes leave no temp droppings behind.
    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["todos".to_string()]);
}
