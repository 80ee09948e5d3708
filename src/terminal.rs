//! Terminal front end
//!
//! Parses player input lines into session commands and prints state
//! changes as they arrive from the session.

use neurogrow::game::{tile_from_name, tile_name, Difficulty, GameState, GameStatus};
use neurogrow::notify::{Notification, Severity};
use neurogrow::session::Command;

/// Result of parsing one input line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedLine {
    pub commands: Vec<Command>,
    /// Tokens that were not understood
    pub rejected: Vec<String>,
}

/// Parse a line such as `1 3 2`, `red blue`, `start` or `difficulty hard`
pub fn parse_line(line: &str) -> ParsedLine {
    let mut parsed = ParsedLine::default();
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
        let lower = token.to_lowercase();
        let command = match lower.as_str() {
            "s" | "start" | "next" => Some(Command::Start),
            "r" | "reset" => Some(Command::Reset),
            "q" | "quit" | "exit" => Some(Command::Quit),
            "d" | "difficulty" => match tokens.next().map(str::parse::<Difficulty>) {
                Some(Ok(difficulty)) => Some(Command::SelectDifficulty(difficulty)),
                Some(Err(_)) | None => None,
            },
            _ => match lower.parse::<usize>() {
                Ok(n) if n >= 1 => Some(Command::Press(n - 1)),
                Ok(_) => None,
                Err(_) => tile_from_name(&lower).map(Command::Press),
            },
        };

        match command {
            Some(command) => parsed.commands.push(command),
            None => parsed.rejected.push(token.to_string()),
        }
    }

    parsed
}

/// Prints the interesting part of each state change
#[derive(Debug, Default)]
pub struct Renderer {
    previous: Option<GameState>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines describing the change from the last rendered state
    pub fn render(&mut self, state: &GameState, tile_count: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let prev_status = self.previous.as_ref().map(|p| p.status);
        let status_changed = prev_status != Some(state.status);

        match state.status {
            GameStatus::Idle if status_changed && prev_status.is_some() => {
                lines.push("Game reset. Type 'start' to play.".to_string());
            }
            GameStatus::Revealing => {
                if status_changed {
                    lines.push(format!(
                        "Level {} - watch the pattern ({} tiles)",
                        state.level,
                        state.sequence.len()
                    ));
                }
                let prev_cursor = self.previous.as_ref().and_then(|p| p.reveal_cursor);
                if let Some(cursor) = state.reveal_cursor {
                    if status_changed || prev_cursor != Some(cursor) {
                        let tile = state.sequence.get(cursor).copied().unwrap_or_default();
                        lines.push(format!(
                            "  [{}/{}] {}",
                            cursor + 1,
                            state.sequence.len(),
                            tile_name(tile)
                        ));
                    }
                }
            }
            GameStatus::AwaitingInput => {
                if status_changed {
                    lines.push(format!(
                        "Your turn! Repeat {} tiles within {}s. {}",
                        state.sequence.len(),
                        state.time_left,
                        tile_legend(tile_count)
                    ));
                } else if let Some(prev) = &self.previous {
                    if state.player_input.len() != prev.player_input.len() {
                        lines.push(format!(
                            "  {}/{}",
                            state.player_input.len(),
                            state.sequence.len()
                        ));
                    }
                    if state.time_left != prev.time_left && state.time_left <= 5 {
                        lines.push(format!("  {}s left", state.time_left));
                    }
                }
            }
            GameStatus::Correct if status_changed => {
                lines.push(format!("Correct! Score: {}", state.score));
            }
            GameStatus::Incorrect if status_changed => {
                let pattern: Vec<_> = state.sequence.iter().map(|&t| tile_name(t)).collect();
                lines.push(format!("The pattern was: {}", pattern.join(" ")));
                lines.push(format!(
                    "Run over at level {} with {} points. Type 'start' to retry or 'reset'.",
                    state.level, state.score
                ));
            }
            GameStatus::Finished if status_changed => {
                lines.push(format!("Game complete! Final score: {}", state.score));
            }
            _ => {}
        }

        self.previous = Some(state.clone());
        lines
    }
}

/// `1=Red 2=Blue ...` for the current board
pub fn tile_legend(tile_count: usize) -> String {
    (0..tile_count)
        .map(|t| format!("{}={}", t + 1, tile_name(t)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_notification(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Normal => "*",
        Severity::Destructive => "!",
    };
    format!(
        "{} {} {}",
        marker, notification.title, notification.description
    )
}

pub fn help_text() -> &'static str {
    "Commands: start | reset | difficulty <easy|medium|hard> | quit\n\
     Replay tiles by number (1-based) or colour name, several per line."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiles() {
        let parsed = parse_line("1 3 red Blue");
        assert_eq!(
            parsed.commands,
            vec![
                Command::Press(0),
                Command::Press(2),
                Command::Press(0),
                Command::Press(1)
            ]
        );
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_controls() {
        let parsed = parse_line("difficulty hard start");
        assert_eq!(
            parsed.commands,
            vec![Command::SelectDifficulty(Difficulty::Hard), Command::Start]
        );
        assert_eq!(parse_line("q").commands, vec![Command::Quit]);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let parsed = parse_line("0 banana d nightmare");
        assert!(parsed.commands.is_empty());
        assert_eq!(parsed.rejected, vec!["0", "banana", "d"]);
    }

    #[test]
    fn test_render_reveal_and_input() {
        let mut renderer = Renderer::new();
        assert!(renderer.render(&GameState::new(), 4).is_empty());

        let mut state = GameState {
            sequence: vec![2, 0],
            status: GameStatus::Revealing,
            ..GameState::new()
        };
        assert_eq!(renderer.render(&state, 4), vec!["Level 1 - watch the pattern (2 tiles)"]);

        state.reveal_cursor = Some(0);
        assert_eq!(renderer.render(&state, 4), vec!["  [1/2] Green"]);

        state.reveal_cursor = None;
        state.status = GameStatus::AwaitingInput;
        state.time_left = 9;
        let lines = renderer.render(&state, 4);
        assert!(lines[0].starts_with("Your turn! Repeat 2 tiles within 9s."));
        assert!(lines[0].contains("3=Green"));

        state.player_input.push(2);
        assert_eq!(renderer.render(&state, 4), vec!["  1/2"]);
    }

    #[test]
    fn test_render_failure_shows_pattern() {
        let mut renderer = Renderer::new();
        let state = GameState {
            sequence: vec![1, 3],
            player_input: vec![0],
            status: GameStatus::Incorrect,
            ..GameState::new()
        };
        let lines = renderer.render(&state, 4);
        assert_eq!(lines[0], "The pattern was: Blue Yellow");
    }

    #[test]
    fn test_format_notification() {
        assert_eq!(
            format_notification(&Notification::timed_out()),
            "! Time's up! You ran out of time. Try again!"
        );
    }
}
