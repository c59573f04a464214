//! Console front-end and command loop.
//!
//! Reads one command or move per line, keeps the current game, and lets the
//! selected engine answer for its side. Moves are accepted in SAN or coordinate
//! form; everything printed about moves is SAN.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;

use crate::chess_errors::ChessResult;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::*;
use crate::search::minimax::SearchConfig;
use crate::utils::pgn::write_pgn;
use crate::utils::render_game_state::render_game_state;
use crate::utils::san::{move_to_san, san_to_move};
use crate::utils::text_export::{legal_moves_san, move_history_to_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    Minimax,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayAs {
    White,
    Black,
    /// Both sides are entered by hand; the engine only moves on `go`.
    Both,
}

impl PlayAs {
    fn engine_side(self) -> Option<Color> {
        match self {
            PlayAs::White => Some(Color::Dark),
            PlayAs::Black => Some(Color::Light),
            PlayAs::Both => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub engine: EngineKind,
    pub depth: u8,
    pub play_as: PlayAs,
    pub fen: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Minimax,
            depth: SearchConfig::default().max_depth,
            play_as: PlayAs::White,
            fen: None,
        }
    }
}

pub fn build_engine(kind: EngineKind, depth: u8) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new(SearchConfig::with_depth(depth))),
        EngineKind::Random => Box::new(RandomEngine::new()),
    }
}

pub fn run_stdio_loop(config: &ConsoleConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let start = match &config.fen {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(state) => state,
            Err(err) => {
                writeln!(stdout, "error: {err}")?;
                return Ok(());
            }
        },
        None => GameState::new_game(),
    };

    let engine = build_engine(config.engine, config.depth);
    let mut session = ConsoleSession::new(start, engine, config.play_as.engine_side());
    session.start(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleSession {
    game_state: GameState,
    initial_state: GameState,
    engine: Box<dyn Engine>,
    engine_side: Option<Color>,
}

impl ConsoleSession {
    pub fn new(game_state: GameState, engine: Box<dyn Engine>, engine_side: Option<Color>) -> Self {
        Self {
            initial_state: game_state.clone(),
            game_state,
            engine,
            engine_side,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Print the opening board and let the engine move first if it is its turn.
    pub fn start(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_game_state(&self.game_state))?;
        writeln!(out, "type a move (e4, Nf3, e2e4) or 'help'")?;
        self.reply_if_engine_to_move(out)
    }

    /// Handle one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        match trimmed {
            "quit" | "exit" => return Ok(true),
            "help" => {
                writeln!(
                    out,
                    "commands: board, moves, history, pgn, fen, go, new, quit; anything else is read as a move"
                )?;
            }
            "board" => writeln!(out, "{}", render_game_state(&self.game_state))?,
            "fen" => writeln!(out, "{}", self.game_state.get_fen())?,
            "moves" => match legal_moves_san(&self.game_state) {
                Ok(sans) => writeln!(out, "{}", sans.join(" "))?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "history" => match move_history_to_string(&self.game_state) {
                Ok(text) => writeln!(out, "{text}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "pgn" => match write_pgn(
                &self.game_state,
                self.player_name(Color::Light),
                self.player_name(Color::Dark),
            ) {
                Ok(text) => write!(out, "{text}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "new" => {
                self.game_state = self.initial_state.clone();
                self.engine.new_game();
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                self.reply_if_engine_to_move(out)?;
            }
            "go" => self.engine_move(out)?,
            text => self.human_move(text, out)?,
        }

        Ok(false)
    }

    fn player_name(&self, color: Color) -> &str {
        if self.engine_side == Some(color) {
            self.engine.name()
        } else {
            "Human"
        }
    }

    fn human_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.game_state.status().is_terminal() {
            writeln!(out, "game is over; 'new' starts again")?;
            return Ok(());
        }

        let Some(mv) = san_to_move(&self.game_state, text) else {
            writeln!(out, "illegal move: {text}")?;
            return Ok(());
        };

        match self.play(mv) {
            Ok(report) => write!(out, "{report}")?,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(());
            }
        }
        self.reply_if_engine_to_move(out)
    }

    fn reply_if_engine_to_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.engine_side == Some(self.game_state.side_to_move)
            && !self.game_state.status().is_terminal()
        {
            self.engine_move(out)?;
        }
        Ok(())
    }

    fn engine_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        let output = match self.engine.choose_move(&self.game_state, &GoParams::default()) {
            Ok(output) => output,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(());
            }
        };
        for line in &output.info_lines {
            writeln!(out, "{line}")?;
        }

        match output.best_move {
            Some(mv) => match self.play(mv) {
                Ok(report) => write!(out, "{report}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            None => writeln!(out, "no legal move")?,
        }
        Ok(())
    }

    /// Apply `mv` and describe it in SAN along with any change of status.
    fn play(&mut self, mv: Move) -> ChessResult<String> {
        let san = move_to_san(&self.game_state, mv)?;
        let mover = self.game_state.side_to_move;
        self.game_state = self.game_state.make_move(mv)?;

        let mut report = format!("{} plays {san}\n", color_name(mover));
        if let Some(note) = status_note(&self.game_state) {
            report.push_str(&note);
            report.push('\n');
        }
        Ok(report)
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Light => "White",
        Color::Dark => "Black",
    }
}

/// Human-readable status line, or `None` during normal play.
pub fn status_note(game_state: &GameState) -> Option<String> {
    let side = color_name(game_state.side_to_move);
    let winner = color_name(game_state.side_to_move.opposite());
    match game_state.status() {
        GameStatus::Playing => None,
        GameStatus::Check => Some(format!("{side} is in check")),
        GameStatus::Checkmate => Some(format!("checkmate, {winner} wins")),
        GameStatus::Stalemate => Some("stalemate, draw".to_owned()),
        GameStatus::Draw(DrawReason::FiftyMoveRule) => Some("draw by the fifty-move rule".to_owned()),
        GameStatus::Draw(DrawReason::Repetition) => Some("draw by threefold repetition".to_owned()),
        GameStatus::Draw(DrawReason::InsufficientMaterial) => {
            Some("draw by insufficient material".to_owned())
        }
    }
}
