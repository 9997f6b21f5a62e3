#![cfg(feature = "std")]

//! Terminal front end: renders the board and history screens as text and
//! turns typed lines into input events.

use std::io::{self, BufRead, Write};

use crate::{
    board::Board,
    common::Player,
    config::BOARD_SIZE,
    controller::RoundController,
    history::HistorySummary,
    ui::{GameDisplay, InputEvent, View},
};

/// [`GameDisplay`] that writes plain text to `W`.
pub struct CliDisplay<W: Write> {
    out: W,
    // status already printed by the last board render
    status_shown: Option<Player>,
}

impl CliDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CliDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            status_shown: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a free-form line, e.g. an input error.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print the prompt matching the current view.
    pub fn prompt(&mut self, view: View) -> io::Result<()> {
        match view {
            View::Board => write!(self.out, "Move (e.g. B2, q to quit): ")?,
            View::History => {
                write!(self.out, "Press enter to continue to the next round (q to quit): ")?
            }
        }
        self.out.flush()
    }

    fn write_board(&mut self, board: &Board, current: Player) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "  ")?;
        for c in 0..BOARD_SIZE as usize {
            write!(self.out, " {}  ", column_letter(c))?;
        }
        writeln!(self.out)?;
        for (r, row) in board.cells().iter().enumerate() {
            if r > 0 {
                writeln!(self.out, "   ---+---+---")?;
            }
            let marks: Vec<String> = row
                .iter()
                .map(|cell| cell.player().map(Player::symbol).unwrap_or('.').to_string())
                .collect();
            writeln!(self.out, "{}  {}", r + 1, marks.join(" | "))?;
        }
        self.write_status(current)
    }

    fn write_status(&mut self, current: Player) -> io::Result<()> {
        writeln!(self.out, "Current Player: {}", current)?;
        self.status_shown = Some(current);
        Ok(())
    }

    fn write_history(&mut self, summary: &HistorySummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Game History")?;
        writeln!(self.out, "X Wins: {}", summary.x_wins)?;
        writeln!(self.out, "O Wins: {}", summary.o_wins)?;
        let recent = summary
            .most_recent_winner
            .map(|p| p.to_string())
            .unwrap_or_else(|| "None".to_string());
        writeln!(self.out, "Most Recent Winner: {}", recent)?;
        self.status_shown = None;
        Ok(())
    }
}

impl<W: Write> GameDisplay for CliDisplay<W> {
    fn render_board(&mut self, board: &Board, current: Player) {
        if let Err(e) = self.write_board(board, current) {
            log::warn!("failed to draw board: {}", e);
        }
    }

    fn update_status(&mut self, current: Player) {
        if self.status_shown == Some(current) {
            return;
        }
        if let Err(e) = self.write_status(current) {
            log::warn!("failed to draw status: {}", e);
        }
    }

    fn render_history(&mut self, summary: &HistorySummary) {
        if let Err(e) = self.write_history(summary) {
            log::warn!("failed to draw history: {}", e);
        }
    }
}

fn column_letter(c: usize) -> char {
    (b'A' + c as u8) as char
}

/// Format a position as column letter plus 1-based row, e.g. `B3`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    format!("{}{}", column_letter(c), r + 1)
}

/// Parse `B2` (column letter, row number) or `2 2` (row, column; both
/// 1-based) into zero-based `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let size = BOARD_SIZE as usize;
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let mut parts = input.split_whitespace();
    if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
        let row: usize = a
            .parse()
            .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", a, size))?;
        let col: usize = b
            .parse()
            .map_err(|_| format!("Invalid column '{}' - must be a number 1-{}", b, size))?;
        if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
            return Err(format!("Position {} {} out of bounds - must be 1-{}", row, col, size));
        }
        return Ok((row - 1, col - 1));
    }

    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    let last_col = column_letter(size - 1);
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

/// What a typed line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Event(InputEvent),
    Quit,
}

/// Interpret one line of input for the screen currently shown.
pub fn parse_command(input: &str, view: View) -> Result<CliCommand, String> {
    let line = input.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(CliCommand::Quit);
    }
    match view {
        View::Board => {
            let (row, col) = parse_coord(line)?;
            Ok(CliCommand::Event(InputEvent::CellClicked { row, col }))
        }
        View::History if line.is_empty() || line.eq_ignore_ascii_case("c") => {
            Ok(CliCommand::Event(InputEvent::ContinueClicked))
        }
        View::History => Err("Press enter to continue or q to quit".to_string()),
    }
}

/// Run the interactive loop until the player quits or input ends.
///
/// Unparseable lines are reported and never reach the controller. An error
/// returned by the controller means the input layer let through an event it
/// should have filtered, and ends the session.
pub fn run_cli<R, W>(mut input: R, controller: &mut RoundController<CliDisplay<W>>) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        let view = controller.view();
        controller.display_mut().prompt(view)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input closed");
            controller.display_mut().message("")?;
            break;
        }

        match parse_command(&line, view) {
            Ok(CliCommand::Quit) => break,
            Ok(CliCommand::Event(event)) => {
                controller.handle(event).map_err(|e| anyhow::anyhow!(e))?
            }
            Err(msg) => controller.display_mut().message(&msg)?,
        }
    }

    let history = controller.history();
    log::info!(
        "session over: X {} - O {} over {} rounds",
        history.win_count(Player::X),
        history.win_count(Player::O),
        controller.rounds_completed()
    );
    Ok(())
}
