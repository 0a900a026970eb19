mod error;
mod eval;
mod lex;

pub mod builtin;
pub mod host;
pub mod pmatch;

pub use error::Error;
pub use eval::evaluate;
pub use eval::evaluate_expression;
pub use eval::reports;
pub use eval::Report;
pub use eval::FALLBACK_MESSAGE;
pub use host::Console;
pub use host::Outcome;
pub use host::OutcomeKind;
pub use lex::classify;
pub use lex::statements;
pub use lex::Directive;
pub use lex::Statements;
pub use pmatch::Matcher;

pub type Result<T> = std::result::Result<T, Error>;
