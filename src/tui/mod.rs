//! Terminal I/O: line console and text rendering

pub mod console;
pub mod render;

pub use console::{Console, LineConsole, Tone};
