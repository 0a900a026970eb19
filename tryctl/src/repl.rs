//! REPL for tryctl
use anyhow::Result;
use std::path::PathBuf;
use tryit::host::Sink;
use tryit::Console;

use crate::editor::{self, Editor};
use crate::print::Printer;
use rustyline::error::ReadlineError;

/// Entrypoint for running REPL.
/// Returns Err if REPL terminated with error
pub(crate) async fn run(console: &mut Console, printer: &mut Printer) -> Result<()> {
    let mut rl = editor::editor()?;
    let history = history_file();

    load_history(&mut rl, &history);

    for outcome in console.outcomes() {
        printer.show(outcome);
    }

    loop {
        let line = match rl.readline("tryit> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                line
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };

        match line.trim() {
            "exit" => break,
            ":clear" => {
                for outcome in console.clear() {
                    printer.show(outcome);
                }
            }
            _ => {
                console.execute_with(&line, printer).await;
            }
        }
        printer.finish()?;
    }

    save_history(&mut rl, &history);

    Ok(())
}

/// Path to file to use for history
fn history_file() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .or_else(dirs::home_dir)?;
    Some(dir.as_path().join(".tryctl_history"))
}

fn load_history(rl: &mut Editor, history: &Option<PathBuf>) {
    if let Some(history) = history {
        if let Err(e) = rl.load_history(&history) {
            tracing::debug!("Failed to load {} - {}", history.to_string_lossy(), e);
        }
    }
}

fn save_history(rl: &mut Editor, history: &Option<PathBuf>) {
    if let Some(history) = history {
        if let Err(e) = rl.save_history(&history) {
            eprintln!("Failed to save {} - {}", history.to_string_lossy(), e);
        }
    }
}
