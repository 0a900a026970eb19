//! Splits demo source into statements and classifies their directives
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Marker that starts a comment line
const COMMENT: &str = "--";

static DEF_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+([0-9A-Za-z_]+)").expect("valid regex literal"));

static THEOREM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"theorem\s+([0-9A-Za-z_]+)").expect("valid regex literal"));

/// Trim whitespace and byte order marks from both ends
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{FEFF}')
}

/// A recognized directive within a single statement
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `#eval EXPR` with its trimmed expression
    Eval(String),
    /// `def NAME ...` with the defined function name
    Def(String),
    /// `theorem NAME ...` with the theorem name
    Theorem(String),
}

/// Iterate over statements of source, i.e. trimmed lines that are neither blank nor comments
pub fn statements(source: &str) -> Statements<'_> {
    Statements {
        inner: source.lines(),
    }
}

/// An iterator over statements
pub struct Statements<'a> {
    inner: std::str::Lines<'a>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .map(trim)
            .find(|line| !line.is_empty() && !line.starts_with(COMMENT))
    }
}

/// Classify a statement into the directives it carries.
///
/// Each directive is checked on its own rather than as alternatives, so the result lists every
/// prefix the statement satisfies, in `#eval`, `def`, `theorem` order. Statements without a
/// recognized directive produce nothing.
pub fn classify(statement: &str) -> Vec<Directive> {
    let mut directives = vec![];

    if let Some(rest) = statement.strip_prefix("#eval") {
        directives.push(Directive::Eval(trim(rest).to_string()));
    }

    if statement.starts_with("def ") {
        if let Some(name) = first_capture(&DEF_NAME, statement) {
            directives.push(Directive::Def(name));
        }
    }

    if statement.starts_with("theorem ") {
        if let Some(name) = first_capture(&THEOREM_NAME, statement) {
            directives.push(Directive::Theorem(name));
        }
    }

    debug!("classified {statement:?} as {directives:?}");
    directives
}

/// Name captured by the first match of `re` anywhere in `statement`
fn first_capture(re: &Regex, statement: &str) -> Option<String> {
    re.captures(statement)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
