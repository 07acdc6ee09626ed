pub mod intent_parser;

pub use intent_parser::{IntentError, parse_intent};
