pub mod board;
pub mod intent;
pub mod task;

pub use board::*;
pub use intent::*;
pub use task::*;
