//! Line editor for tryctl REPL

use rustyline::{
    history::DefaultHistory,
    validate::{ValidationResult, Validator},
    Completer, Helper, Highlighter, Hinter, Result,
};

/// Custom rustyline::Editor
pub(crate) type Editor = rustyline::Editor<ReplEditor, DefaultHistory>;

/// Create a line editor
pub fn editor() -> Result<Editor> {
    let editor = ReplEditor {};
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(editor));
    Ok(rl)
}

/// Editor for tryctl repl
#[derive(Completer, Helper, Highlighter, Hinter)]
pub struct ReplEditor {}

impl Validator for ReplEditor {
    fn validate(
        &self,
        ctx: &mut rustyline::validate::ValidationContext,
    ) -> Result<rustyline::validate::ValidationResult> {
        Ok(validate_input(ctx.input()))
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}

/// Input is incomplete while a string literal or a bracket is left open.
/// Brackets within strings and comment lines are not checked.
fn validate_input(input: &str) -> ValidationResult {
    let mut stack = vec![];
    let mut in_string = false;
    for line in input.lines() {
        if !in_string && line.trim_start().starts_with("--") {
            continue;
        }
        let mut escaped = false;
        for c in line.chars() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '(' | '[' | '{' => stack.push(c),
                ')' | ']' | '}' => match (stack.pop(), c) {
                    (Some('('), ')') | (Some('['), ']') | (Some('{'), '}') => {}
                    (Some(wanted), _) => {
                        return ValidationResult::Invalid(Some(format!(
                            "{wanted} is not closed"
                        )))
                    }
                    (None, c) => {
                        return ValidationResult::Invalid(Some(format!("{c} is not paired")))
                    }
                },
                _ => {}
            }
        }
    }
    if stack.is_empty() && !in_string {
        ValidationResult::Valid(None)
    } else {
        ValidationResult::Incomplete
    }
}
