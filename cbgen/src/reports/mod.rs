//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod new;
mod output;

pub use new::{NewReport, NewResult};
pub use output::{Report, TerminalOutput};
