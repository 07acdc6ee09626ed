use std::fs;
use std::io::Read;

use crate::cli::commands::Cli;
use crate::cli::output;
use crate::model::board::Board;
use crate::model::intent::{Intent, TaskRef};
use crate::ops::task_ops;
use crate::parse::parse_intent;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one board session: read the intent script (file or stdin), apply each
/// intent in order against a fresh in-memory board, and render on `show`.
/// All state dies with the process.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = match cli.script {
        Some(ref path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read script '{}': {}", path, e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut board = Board::new();

    for (lineno, line) in source.lines().enumerate() {
        match parse_intent(line) {
            Ok(Some(intent)) => apply_intent(&mut board, &intent, cli.json, cli.quiet)?,
            Ok(None) => {}
            Err(e) => eprintln!("warning: line {}: {} (skipped)", lineno + 1, e),
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Intent handlers
// ---------------------------------------------------------------------------

/// Apply one intent to the board. Mutations that change state get a one-line
/// confirmation; no-ops (stale ids, cancelled drags) stay silent.
fn apply_intent(
    board: &mut Board,
    intent: &Intent,
    json: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match intent {
        Intent::Add(text) => match task_ops::add_task(board, text) {
            Ok(id) => {
                if !quiet {
                    println!("{}", id);
                }
            }
            Err(e) => eprintln!("warning: {}", e),
        },
        Intent::Edit(task_ref, text) => {
            if let Some(id) = resolve(board, *task_ref)
                && task_ops::edit_text(board, id, text)
                && !quiet
            {
                println!("{} text updated", id);
            }
        }
        Intent::Delete(task_ref) => {
            if let Some(id) = resolve(board, *task_ref)
                && task_ops::delete_task(board, id)
                && !quiet
            {
                println!("{} deleted", id);
            }
        }
        Intent::Toggle(task_ref) => {
            if let Some(id) = resolve(board, *task_ref)
                && task_ops::toggle_done(board, id)
                && !quiet
            {
                println!("{} toggled", id);
            }
        }
        Intent::Drag(event) => {
            if board.apply_drag(event) && !quiet {
                // destination is always present when something moved
                if let Some(dest) = event.destination {
                    println!(
                        "moved {} {} -> {} {}",
                        event.source.list, event.source.index, dest.list, dest.index
                    );
                }
            }
        }
        Intent::Show => {
            if json {
                let state = output::board_to_json(board);
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                for line in output::format_board(board) {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}

/// Turn a script task reference into an id, the way a rendered row click
/// would. A stale position resolves to nothing and the intent becomes a
/// no-op, matching the unknown-id case.
fn resolve(board: &Board, task_ref: TaskRef) -> Option<u64> {
    match task_ref {
        TaskRef::Id(id) => Some(id),
        TaskRef::At(list, index) => board.list(list).get(index).map(|t| t.id),
    }
}
