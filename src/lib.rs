//! An in-memory two-list task board: add, edit, toggle, and drag tasks
//! between the active and completed lists.

pub mod cli;
pub mod model;
pub mod ops;
pub mod parse;
