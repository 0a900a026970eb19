//! Builtin functions the demo pretends to evaluate
pub mod math;

pub use math::factorial;
pub use math::fibonacci;
