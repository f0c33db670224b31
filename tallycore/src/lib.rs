//! tallycore — shared library for the tally calculator

pub mod dither;
pub mod engine;
pub mod error;
pub mod format;
pub mod keys;
pub mod repaint;
pub mod theme;
pub mod widgets;

pub use engine::{BinaryOp, Engine, KeySet, UnaryFn};
pub use error::CalcError;
pub use keys::{press, Key, Outcome};
pub use repaint::RepaintController;
pub use theme::TallyTheme;
