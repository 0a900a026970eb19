//! Printing console outcomes to the terminal
use anyhow::Result;
use colored::*;
use tryit::host::Sink;
use tryit::{Outcome, OutcomeKind};

/// Prints outcomes as they are shown, either styled or as JSON lines
pub(crate) struct Printer {
    json: bool,
    failed: Option<serde_json::Error>,
}

impl Printer {
    pub(crate) fn new(json: bool) -> Self {
        Self { json, failed: None }
    }

    /// Surface the first error encountered while printing
    pub(crate) fn finish(&mut self) -> Result<()> {
        match self.failed.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn render(&self, outcome: &Outcome) -> serde_json::Result<String> {
        if self.json {
            return serde_json::to_string(outcome);
        }
        let text = outcome.to_string();
        Ok(match outcome.kind {
            OutcomeKind::Info => text.bright_blue().to_string(),
            OutcomeKind::Success => text.green().to_string(),
            OutcomeKind::Error => text.red().bold().to_string(),
        })
    }
}

impl Sink for Printer {
    fn show(&mut self, outcome: &Outcome) {
        match self.render(outcome) {
            Ok(line) if outcome.kind == OutcomeKind::Error => eprintln!("{line}"),
            Ok(line) => println!("{line}"),
            Err(e) => {
                self.failed.get_or_insert(e);
            }
        }
    }
}
