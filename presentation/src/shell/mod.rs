//! Interactive edit shell
//!
//! - [`command`] — line parsing
//! - [`repl`] — the read-eval-print loop over a settings session

pub mod command;
pub mod repl;

pub use command::ShellCommand;
pub use repl::EditShell;
