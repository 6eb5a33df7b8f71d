//! Interactive play over a line-based reader and writer.

use crate::render::render_text;
use chorus_lapilli::{MatchState, Position};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// How to play, printed when a session starts and on `rules`.
pub const RULES: &str = "\
Chorus lapilli is tic-tac-toe with moving pieces. Players take turns placing
pieces on a 3x3 board, aiming for three in a row.
After your first three pieces you stop adding new ones. Instead, pick one of
your pieces and move it to an empty square next to it, vertically,
horizontally or diagonally.
If you have three pieces on the board and one of them sits in the center
square, your next move must either win or vacate the center.
Enter a cell as 0-8 or as a label such as \"upper left\". Other commands:
jump <n>, history, rules, quit.
";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Click a cell.
    Cell(usize),
    /// Jump to a history step.
    Jump(usize),
    /// Reprint the current view.
    Show,
    /// Print the rules of the game.
    Rules,
    /// Leave the loop.
    Quit,
}

/// Unrecognised player input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised input: {:?}", input)]
pub struct InputError {
    /// The offending line.
    pub input: String,
}

impl PlayCommand {
    /// Parses a line: `0`-`8`, a position label, `jump <n>`, `history`, `rules`, `quit`.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.trim();
        let lower = line.to_lowercase();
        let err = || InputError {
            input: line.to_string(),
        };

        match lower.as_str() {
            "quit" | "exit" | "q" => return Ok(PlayCommand::Quit),
            "history" | "show" | "" => return Ok(PlayCommand::Show),
            "rules" | "help" | "?" => return Ok(PlayCommand::Rules),
            _ => {}
        }

        if let Some(rest) = lower.strip_prefix("jump") {
            return rest.trim().parse().map(PlayCommand::Jump).map_err(|_| err());
        }
        // Raw indices pass through unchecked so the engine decides what is off the board.
        if let Ok(cell) = lower.parse::<usize>() {
            return Ok(PlayCommand::Cell(cell));
        }
        Position::from_label_or_number(&lower)
            .map(|pos| PlayCommand::Cell(pos.to_index()))
            .ok_or_else(err)
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Returns the final match state.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    mut output: W,
) -> anyhow::Result<MatchState> {
    let mut state = MatchState::new();
    writeln!(output, "{}", RULES)?;
    write!(output, "{}", render_text(&state.view()))?;

    for line in input.lines() {
        let line = line?;
        let command = match PlayCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Ignoring input");
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        debug!(?command, "Applying command");

        state = match command {
            PlayCommand::Quit => break,
            PlayCommand::Show => state,
            PlayCommand::Rules => {
                writeln!(output, "{}", RULES)?;
                state
            }
            PlayCommand::Cell(cell) => state.apply_cell_action(cell),
            PlayCommand::Jump(step) => match state.try_jump_to_step(step) {
                Ok(next) => next,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    state
                }
            },
        };
        write!(output, "\n{}", render_text(&state.view()))?;
    }

    output.flush()?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(PlayCommand::parse("4"), Ok(PlayCommand::Cell(4)));
        assert_eq!(PlayCommand::parse(" 11 "), Ok(PlayCommand::Cell(11)));
        assert_eq!(PlayCommand::parse("Upper Left"), Ok(PlayCommand::Cell(0)));
        assert_eq!(PlayCommand::parse("jump 3"), Ok(PlayCommand::Jump(3)));
        assert_eq!(PlayCommand::parse("history"), Ok(PlayCommand::Show));
        assert_eq!(PlayCommand::parse("quit"), Ok(PlayCommand::Quit));
        assert_eq!(PlayCommand::parse(" Rules "), Ok(PlayCommand::Rules));
        assert_eq!(PlayCommand::parse("help"), Ok(PlayCommand::Rules));
        assert!(PlayCommand::parse("jump high").is_err());
        assert!(PlayCommand::parse("diagonally").is_err());
    }

    #[test]
    fn test_interactive_session() {
        let input = "4\n0\njump 1\nnonsense\n8\nquit\n3\n";
        let mut output = Vec::new();
        let state = run_interactive(input.as_bytes(), &mut output).expect("session runs");

        assert_eq!(state.step_number(), 2);
        assert_eq!(state.history().len(), 3);
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Unrecognised input: \"nonsense\""));
        assert!(text.contains("Next player: X"));
    }

    #[test]
    fn test_session_explains_rules() {
        let mut output = Vec::new();
        let state = run_interactive("rules\n".as_bytes(), &mut output).expect("session runs");
        assert_eq!(state, MatchState::new());

        let text = String::from_utf8(output).expect("utf8");
        assert!(text.starts_with(RULES));
        assert_eq!(
            text.matches("must either win or vacate the center").count(),
            2
        );
        assert!(text.contains("empty square next to it"));
    }

    #[test]
    fn test_interactive_reports_bad_jump() {
        let mut output = Vec::new();
        let state = run_interactive("jump 5\n".as_bytes(), &mut output).expect("session runs");
        assert_eq!(state, MatchState::new());
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("Step 5 is outside history of length 1"));
    }
}
