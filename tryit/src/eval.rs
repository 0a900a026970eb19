//! Simulated evaluation of demo source
use crate::lex::{classify, statements, trim, Directive};
use crate::pmatch;
use dyn_fmt::AsStrFormatExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Message reported when no statement produced output
pub const FALLBACK_MESSAGE: &str =
    "No executable expressions found. Try using #eval to evaluate expressions.";

/// Result of an expression no matcher recognizes
const UNDEFINED: &str = "undefined";

const EVAL_TEMPLATE: &str = "#eval {} → {}";
const FUNCTION_TEMPLATE: &str = "✓ Function '{}' defined successfully";
const THEOREM_TEMPLATE: &str = "✓ Theorem '{}' defined successfully";

/// A single line of simulated output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Report {
    Eval { expr: String, result: String },
    Function { name: String },
    Theorem { name: String },
    Fallback,
}

impl From<Directive> for Report {
    fn from(d: Directive) -> Self {
        match d {
            Directive::Eval(expr) => {
                let result = evaluate_expression(&expr);
                Report::Eval { expr, result }
            }
            Directive::Def(name) => Report::Function { name },
            Directive::Theorem(name) => Report::Theorem { name },
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Eval { expr, result } => write!(f, "{}", EVAL_TEMPLATE.format(&[expr, result])),
            Report::Function { name } => write!(f, "{}", FUNCTION_TEMPLATE.format(&[name])),
            Report::Theorem { name } => write!(f, "{}", THEOREM_TEMPLATE.format(&[name])),
            Report::Fallback => write!(f, "{}", FALLBACK_MESSAGE),
        }
    }
}

/// Evaluate source, returning one report per recognized directive in source order.
///
/// Returns a single [Report::Fallback] when nothing in source is recognized.
pub fn reports(source: &str) -> Vec<Report> {
    let mut reports: Vec<Report> = statements(source)
        .flat_map(classify)
        .map(Report::from)
        .collect();

    if reports.is_empty() {
        debug!("no directives found in source");
        reports.push(Report::Fallback);
    }
    reports
}

/// Evaluate source, returning reports joined by newlines. Never fails.
pub fn evaluate(source: &str) -> String {
    reports(source)
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Evaluate a single `#eval` expression. Never fails - unrecognized expressions are `undefined`.
pub fn evaluate_expression(expr: &str) -> String {
    let expr = trim(expr);
    match pmatch::find(expr) {
        Some(Ok(result)) => result,
        Some(Err(e)) => {
            debug!("evaluating {expr:?} failed - {e}");
            UNDEFINED.to_string()
        }
        None => UNDEFINED.to_string(),
    }
}
