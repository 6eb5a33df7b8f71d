//! Terminal front-end for chorus lapilli.
//!
//! The engine crate owns every rule; this crate only parses input, forwards
//! it to the engine and prints the derived view.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod play;
pub mod render;
pub mod script;

pub use cli::{Cli, Command, OutputFormat};
pub use play::{InputError, PlayCommand, RULES, run_interactive};
pub use render::{render, render_text};
pub use script::{Script, ScriptAction, ScriptError};
