use crate::model::intent::{Intent, TaskRef};
use crate::model::task::ListId;
use crate::ops::reorder::{DragEvent, DragLocation};

/// Error type for intent parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument: usage {0}")]
    MissingArgument(&'static str),
    #[error("invalid task id: {0}")]
    InvalidId(String),
    #[error("invalid list (expected 'active' or 'completed'): {0}")]
    InvalidList(String),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("trailing arguments: {0}")]
    TrailingArguments(String),
}

/// Parse one line of an intent script.
///
/// Commands:
///   add <text>
///   edit <ref> <text>
///   delete <ref>
///   toggle <ref>
///   move <list> <index> <list> <index>
///   cancel <list> <index>
///   show
///
/// `<ref>` is a task id, or `<list> <index>` for the row currently shown at
/// that position. `<list>` is `active` or `completed`. Blank lines and `#`
/// comments yield `None`.
pub fn parse_intent(line: &str) -> Result<Option<Intent>, IntentError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let intent = match command {
        "add" => {
            if rest.is_empty() {
                return Err(IntentError::MissingArgument("add <text>"));
            }
            Intent::Add(rest.to_string())
        }
        "edit" => {
            let (task_ref, text) = parse_task_ref(rest, "edit <ref> <text>")?;
            if text.is_empty() {
                return Err(IntentError::MissingArgument("edit <ref> <text>"));
            }
            Intent::Edit(task_ref, text.to_string())
        }
        "delete" => {
            let (task_ref, rest) = parse_task_ref(rest, "delete <ref>")?;
            ensure_no_trailing(rest)?;
            Intent::Delete(task_ref)
        }
        "toggle" => {
            let (task_ref, rest) = parse_task_ref(rest, "toggle <ref>")?;
            ensure_no_trailing(rest)?;
            Intent::Toggle(task_ref)
        }
        "move" => {
            let mut words = rest.split_whitespace();
            let usage = "move <list> <index> <list> <index>";
            let source = parse_location(&mut words, usage)?;
            let destination = parse_location(&mut words, usage)?;
            ensure_no_trailing(&words.collect::<Vec<_>>().join(" "))?;
            Intent::Drag(DragEvent {
                source,
                destination: Some(destination),
            })
        }
        "cancel" => {
            let mut words = rest.split_whitespace();
            let source = parse_location(&mut words, "cancel <list> <index>")?;
            ensure_no_trailing(&words.collect::<Vec<_>>().join(" "))?;
            Intent::Drag(DragEvent {
                source,
                destination: None,
            })
        }
        "show" => {
            ensure_no_trailing(rest)?;
            Intent::Show
        }
        other => return Err(IntentError::UnknownCommand(other.to_string())),
    };

    Ok(Some(intent))
}

/// Parse a task reference off the front of `rest`, returning it along with
/// whatever follows. `active 0` / `completed 2` are positional; a bare
/// number is an id.
fn parse_task_ref<'a>(
    rest: &'a str,
    usage: &'static str,
) -> Result<(TaskRef, &'a str), IntentError> {
    let (first, after) = match rest.split_once(char::is_whitespace) {
        Some((first, after)) => (first, after.trim()),
        None => (rest, ""),
    };
    if first.is_empty() {
        return Err(IntentError::MissingArgument(usage));
    }

    if let Ok(list) = parse_list(first) {
        let (index, after) = match after.split_once(char::is_whitespace) {
            Some((index, after)) => (index, after.trim()),
            None => (after, ""),
        };
        if index.is_empty() {
            return Err(IntentError::MissingArgument(usage));
        }
        let index = index
            .parse()
            .map_err(|_| IntentError::InvalidIndex(index.to_string()))?;
        return Ok((TaskRef::At(list, index), after));
    }

    let id = first
        .parse()
        .map_err(|_| IntentError::InvalidId(first.to_string()))?;
    Ok((TaskRef::Id(id), after))
}

fn parse_list(word: &str) -> Result<ListId, IntentError> {
    match word {
        "active" => Ok(ListId::Active),
        "completed" => Ok(ListId::Completed),
        other => Err(IntentError::InvalidList(other.to_string())),
    }
}

fn parse_location<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    usage: &'static str,
) -> Result<DragLocation, IntentError> {
    let list = words.next().ok_or(IntentError::MissingArgument(usage))?;
    let index = words.next().ok_or(IntentError::MissingArgument(usage))?;
    Ok(DragLocation {
        list: parse_list(list)?,
        index: index
            .parse()
            .map_err(|_| IntentError::InvalidIndex(index.to_string()))?,
    })
}

fn ensure_no_trailing(rest: &str) -> Result<(), IntentError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(IntentError::TrailingArguments(rest.to_string()))
    }
}
