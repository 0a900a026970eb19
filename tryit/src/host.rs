//! Host adapter for driving the evaluator from an interactive front end.
//!
//! [Console] keeps the output log a "try it" box would display. Front ends observe outcomes as
//! they are produced by implementing [Sink].
use crate::evaluate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Shown when the console is cleared
pub const PLACEHOLDER: &str = "Enter code and click Execute to see the results!";

/// Shown when execute is called without code
pub const EMPTY_INPUT: &str = "Please enter some code to execute.";

/// Shown while the code is being "executed"
pub const EXECUTING: &str = "Executing code...";

/// Archive offered for download
pub const DOWNLOAD_URL: &str =
    "https://github.com/your-username/theorem-ai/archive/refs/heads/main.zip";

/// Suggested file name for the downloaded archive
pub const DOWNLOAD_FILE: &str = "theorem-ai.zip";

/// Documentation topics with their paths
const DOCS: [(&str, &str); 3] = [
    ("quick-start", "docs/quick-start.md"),
    ("tutorial", "docs/tutorial.md"),
    ("reference", "docs/reference.md"),
];

/// Path to documentation for topic, if it exists
pub fn doc_path(topic: &str) -> Option<&'static str> {
    DOCS.iter()
        .find_map(|(t, path)| (*t == topic).then_some(*path))
}

/// Known documentation topics
pub fn doc_topics() -> impl Iterator<Item = &'static str> {
    DOCS.iter().map(|(t, _)| *t)
}

/// Styling of an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Info,
    Success,
    Error,
}

impl OutcomeKind {
    /// Icon shown alongside outcomes of this kind
    pub fn icon(&self) -> &'static str {
        match self {
            OutcomeKind::Info => "ℹ",
            OutcomeKind::Success => "✔",
            OutcomeKind::Error => "✖",
        }
    }
}

/// A message displayed by the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.icon(), self.message)
    }
}

/// Receives outcomes as the console produces them
pub trait Sink {
    fn show(&mut self, outcome: &Outcome);

    /// Called when the console discards its previous output
    fn clear(&mut self) {}
}

impl Sink for () {
    fn show(&mut self, _outcome: &Outcome) {}
}

impl Sink for Vec<Outcome> {
    fn show(&mut self, outcome: &Outcome) {
        self.push(outcome.clone());
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }
}

/// The output log of a "try it" box
#[derive(Debug, Clone)]
pub struct Console {
    log: Vec<Outcome>,
    delay: Duration,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console showing the placeholder message
    pub fn new() -> Self {
        Self {
            log: vec![Outcome::info(PLACEHOLDER)],
            delay: Duration::ZERO,
        }
    }

    /// Simulated processing time between the executing message and the result
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Outcomes currently displayed
    pub fn outcomes(&self) -> &[Outcome] {
        &self.log
    }

    /// Reset console to the placeholder message
    pub fn clear(&mut self) -> &[Outcome] {
        self.log = vec![Outcome::info(PLACEHOLDER)];
        &self.log
    }

    /// Execute input immediately, ignoring the configured delay
    pub fn execute(&mut self, input: &str) -> &[Outcome] {
        let Some(code) = self.begin(input, &mut ()) else {
            return &self.log;
        };
        self.finish(code, &mut ());
        &self.log
    }

    /// Execute input, waiting out the configured delay before the result is shown
    pub async fn execute_with<S: Sink>(&mut self, input: &str, sink: &mut S) -> &[Outcome] {
        let Some(code) = self.begin(input, sink) else {
            return &self.log;
        };
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.finish(code, sink);
        &self.log
    }

    /// Validate input and show the executing message. Returns trimmed code to evaluate.
    fn begin<'a, S: Sink>(&mut self, input: &'a str, sink: &mut S) -> Option<&'a str> {
        let code = crate::lex::trim(input);
        if code.is_empty() {
            debug!("execute called without code");
            let error = Outcome::error(EMPTY_INPUT);
            if self.log.last() == Some(&error) {
                self.log.pop();
            }
            self.push(error, sink);
            return None;
        }
        self.log.clear();
        sink.clear();
        self.push(Outcome::info(EXECUTING), sink);
        Some(code)
    }

    fn finish<S: Sink>(&mut self, code: &str, sink: &mut S) {
        let result = evaluate(code);
        self.push(Outcome::success(result), sink);
    }

    fn push<S: Sink>(&mut self, outcome: Outcome, sink: &mut S) {
        sink.show(&outcome);
        self.log.push(outcome);
    }
}
