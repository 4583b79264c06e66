use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

/// Return the path to the error log file.
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".errors.log")
}

/// Append a timestamped line to the error log. The TUI never surfaces
/// storage errors, so this file is the only trace of them. Logging failures
/// are swallowed and printed to stderr.
pub fn log_error(data_dir: &Path, context: &str, detail: &str) {
    if let Err(e) = log_error_inner(data_dir, context, detail) {
        eprintln!("warning: could not write to error log: {}", e);
    }
}

fn log_error_inner(data_dir: &Path, context: &str, detail: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path(data_dir))?;
    let stamp = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    writeln!(file, "{} {}: {}", stamp, context, detail)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn log_appends_timestamped_lines() {
        let dir = TempDir::new().unwrap();
        log_error(dir.path(), "load todos", "expected value at line 1");
        log_error(dir.path(), "save todos", "disk full");

        let content = std::fs::read_to_string(log_path(dir.path())).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("load todos: expected value at line 1"));
        assert!(lines[1].contains("save todos: disk full"));
        // Each line starts with an RFC 3339 timestamp.
        assert!(chrono::DateTime::parse_from_rfc3339(&lines[0][..20]).is_ok());
    }

    #[test]
    fn log_path_is_hidden_file_in_data_dir() {
        assert_eq!(
            log_path(Path::new("/tmp/tick")),
            PathBuf::from("/tmp/tick/.errors.log")
        );
    }
}
