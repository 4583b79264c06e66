use std::error::Error;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::storage::{self, DirStore};
use crate::model::task::Filter;
use crate::store::Store;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let data_dir = storage::resolve_data_dir(cli.data_dir.as_deref())?;
    let kv = DirStore::open(&data_dir)?;
    let mut store = storage::load_or_seed(&kv, &data_dir);

    // No subcommand is routed to the TUI in main.rs.
    let Some(cmd) = cli.command else {
        return Ok(());
    };

    match cmd {
        Commands::Add(args) => cmd_add(&kv, &mut store, args, json),
        Commands::List(args) => cmd_list(&store, args, json),
        Commands::Toggle(args) => cmd_toggle(&kv, &mut store, args, json),
        Commands::Rm(args) => cmd_rm(&kv, &mut store, args, json),
        Commands::Clear => cmd_clear(&kv, &mut store, json),
        Commands::Count => cmd_count(&store, json),
        Commands::Mv(args) => cmd_mv(&kv, &mut store, args, json),
        Commands::Theme(args) => cmd_theme(&kv, args, json),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn cmd_add(
    kv: &DirStore,
    store: &mut Store,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let text = args.text.join(" ");
    let Some(id) = store.add(&text) else {
        return Err("todo text is empty".into());
    };
    storage::save_tasks(kv, store.tasks())?;

    if json {
        println!("{}", serde_json::json!({ "id": id }));
    } else {
        println!("added {}", id);
    }
    Ok(())
}

fn cmd_list(store: &Store, args: ListArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let Some(filter) = Filter::parse(&args.filter) else {
        return Err(format!(
            "unknown filter '{}' (expected all, active or completed)",
            args.filter
        )
        .into());
    };

    let tasks = store.filtered(filter);
    if json {
        let out = ListJson {
            filter: filter.label(),
            tasks: tasks.iter().map(|t| task_to_json(t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for task in tasks {
            println!("{}", task_line(task));
        }
    }
    Ok(())
}

fn cmd_toggle(
    kv: &DirStore,
    store: &mut Store,
    args: ToggleArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if !store.toggle(args.id) {
        return Err(format!("no todo with id {}", args.id).into());
    }
    storage::save_tasks(kv, store.tasks())?;

    let task = store.get(args.id).expect("toggled task exists");
    if json {
        println!("{}", serde_json::to_string(&task_to_json(task))?);
    } else {
        println!("{}", task_line(task));
    }
    Ok(())
}

fn cmd_rm(
    kv: &DirStore,
    store: &mut Store,
    args: RmArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if !store.delete(args.id) {
        return Err(format!("no todo with id {}", args.id).into());
    }
    storage::save_tasks(kv, store.tasks())?;

    if json {
        println!("{}", serde_json::json!({ "deleted": args.id }));
    } else {
        println!("deleted {}", args.id);
    }
    Ok(())
}

fn cmd_clear(kv: &DirStore, store: &mut Store, json: bool) -> Result<(), Box<dyn Error>> {
    let removed = store.clear_completed();
    if removed > 0 {
        storage::save_tasks(kv, store.tasks())?;
    }

    if json {
        println!("{}", serde_json::json!({ "cleared": removed }));
    } else {
        println!("cleared {} completed", removed);
    }
    Ok(())
}

fn cmd_count(store: &Store, json: bool) -> Result<(), Box<dyn Error>> {
    let active = store.count_active();
    if json {
        println!("{}", serde_json::to_string(&CountJson { active })?);
    } else {
        println!("{}", active);
    }
    Ok(())
}

fn cmd_mv(
    kv: &DirStore,
    store: &mut Store,
    args: MvArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    for id in [args.id, args.target] {
        if store.get(id).is_none() {
            return Err(format!("no todo with id {}", id).into());
        }
    }

    // Same id twice is a no-op, not an error.
    if store.reorder(args.id, args.target) {
        storage::save_tasks(kv, store.tasks())?;
    }

    if json {
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        println!("{}", serde_json::json!({ "order": ids }));
    } else {
        println!("moved {}", args.id);
    }
    Ok(())
}

fn cmd_theme(kv: &DirStore, args: ThemeArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let dark = match args.mode.as_deref() {
        None => storage::load_theme(kv),
        Some("dark") => {
            storage::save_theme(kv, true)?;
            true
        }
        Some("light") => {
            storage::save_theme(kv, false)?;
            false
        }
        Some(other) => {
            return Err(format!("unknown theme '{}' (expected dark or light)", other).into());
        }
    };

    if json {
        println!("{}", serde_json::to_string(&ThemeJson { dark })?);
    } else {
        println!("{}", if dark { "dark" } else { "light" });
    }
    Ok(())
}
