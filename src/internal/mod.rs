#[macro_use]
mod macros;

pub mod entry;
pub mod header;
pub mod lead;
pub mod magic;
pub mod package;
pub mod tags;
