//! Text and JSON rendering of a match view.

use crate::cli::OutputFormat;
use chorus_lapilli::{Board, MatchView};
use tracing::instrument;

/// Renders `view` as plain text: board, status, hint and history.
pub fn render_text(view: &MatchView) -> String {
    let mut out = Board::from_cells(view.board).display();
    out.push_str("\n\n");
    out.push_str(&view.status);
    out.push('\n');
    if let Some(hint) = &view.hint {
        out.push_str(hint);
        out.push('\n');
    }
    for link in &view.history {
        let marker = if link.step == view.step { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, link.step, link.label));
    }
    out
}

/// Renders `view` in the requested format.
#[instrument(skip(view))]
pub fn render(view: &MatchView, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_lapilli::MatchState;

    #[test]
    fn test_render_new_match() {
        let text = render_text(&MatchState::new().view());
        assert_eq!(
            text,
            "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\nNext player: X\n> 0. Go to game start\n"
        );
    }

    #[test]
    fn test_render_marks_current_step_and_hint() {
        let state = MatchState::replay(&[0, 1, 3, 4, 2, 5, 0, 8]).jump_to_step(3);
        let text = render_text(&state.view());
        assert!(text.contains("> 3. Go to move #3"));
        assert!(text.contains("  6. Go to move #6"));
        assert!(text.contains("Next player: O"));
    }

    #[test]
    fn test_render_json() {
        let json = render(&MatchState::new().view(), OutputFormat::Json).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["status"], "Next player: X");
        assert_eq!(value["step"], 0);
    }
}
