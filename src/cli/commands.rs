use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tk", about = concat!("[\u{2713}] tick v", env!("CARGO_PKG_VERSION"), " - your todos, one list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a todo to the top of the list
    Add(AddArgs),
    /// List todos
    List(ListArgs),
    /// Flip a todo's completed flag
    Toggle(ToggleArgs),
    /// Delete a todo
    Rm(RmArgs),
    /// Delete all completed todos
    Clear,
    /// Print the number of active todos
    Count,
    /// Move a todo to another todo's position
    Mv(MvArgs),
    /// Show or set the theme
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter: all, active or completed
    #[arg(long, default_value = "all")]
    pub filter: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct RmArgs {
    pub id: u64,
}

#[derive(Args)]
pub struct MvArgs {
    /// Todo to move
    pub id: u64,
    /// Todo whose position it takes
    pub target: u64,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// "dark" or "light" (omit to show the current theme)
    pub mode: Option<String>,
}
