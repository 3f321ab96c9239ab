//! Go Text Protocol (GTP) front end.
//!
//! A thin adapter that turns GTP version 2 commands into [`Engine`] calls, so
//! the engine can be driven by graphical Go interfaces like Sabaki or GoGui.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Start a new game on a `size`x`size` board
//! - `clear_board` - Reset the board to empty
//! - `komi <value>` - Accepted and ignored (no scoring)
//! - `play <color> <vertex>` - Play a move
//! - `genmove <color>` - Generate and play a move for the given color
//! - `showboard` - Print the board
//!
//! ## Example
//!
//! ```ignore
//! use gakusei::gtp::GtpEngine;
//! let mut gtp = GtpEngine::new(engine);
//! gtp.run()?;
//! ```

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::board::Color;
use crate::engine::Engine;
use crate::position::column_letter;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    engine: Engine,
}

impl GtpEngine {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.serve(stdin.lock(), &mut stdout)
    }

    /// Serve commands from `input` until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(out, "{prefix}{id_str} {message}\n\n")?;
            out.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                match self.engine.initialize(size) {
                    Ok(()) => {
                        info!("new {size}x{size} game");
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "clear_board" => {
                let size = self.engine.size();
                match self.engine.initialize(size) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "komi" => match args.first().map(|a| a.parse::<f32>()) {
                Some(Ok(_)) => (true, String::new()),
                Some(Err(_)) => (false, "invalid komi".to_string()),
                None => (false, "missing argument".to_string()),
            },

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                let vertex = match parse_vertex(args[1], self.engine.size()) {
                    Ok(v) => v,
                    Err(e) => return (false, e),
                };
                if self.engine.side_to_move() != color {
                    self.engine.toggle_side();
                }
                match vertex {
                    None => {
                        self.engine.pass_turn();
                        (true, String::new())
                    }
                    Some((col, row)) => match self.engine.play_move(col, row, color) {
                        Ok(captured) => {
                            info!("{color} plays {}, captures {captured}", args[1]);
                            (true, String::new())
                        }
                        Err(e) => {
                            warn!("rejected play {color} {}: {e}", args[1]);
                            (false, "illegal move".to_string())
                        }
                    },
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|a| parse_color(a)) else {
                    return (false, "invalid color".to_string());
                };
                if self.engine.side_to_move() != color {
                    self.engine.toggle_side();
                }
                let depth = self.engine.config().depth;
                match self.engine.generate_move(color, depth) {
                    Some((col, row)) => match self.engine.play_move(col, row, color) {
                        Ok(_) => {
                            let vertex = format_vertex(col, row, self.engine.size());
                            info!("{color} generated {vertex}");
                            (true, vertex)
                        }
                        Err(e) => (false, e.to_string()),
                    },
                    None => {
                        self.engine.pass_turn();
                        (true, "pass".to_string())
                    }
                }
            }

            "showboard" => (true, format!("\n{}", self.engine.render_board())),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Parse a GTP color (`b`, `black`, `w`, `white`).
pub fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

/// Parse a GTP vertex (e.g. "D4") into `(col, row)`, or `None` for a pass.
///
/// Columns use letters A-Z skipping I; row numbers count from the bottom line.
pub fn parse_vertex(s: &str, size: usize) -> Result<Option<(usize, usize)>, String> {
    if s.eq_ignore_ascii_case("pass") {
        return Ok(None);
    }

    let mut chars = s.chars();
    let letter = chars
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() && *c != 'I')
        .ok_or_else(|| format!("invalid vertex: {s}"))?;
    let mut col = (letter as u8 - b'A') as usize;
    // Skip 'I' column (Go convention to avoid confusion with 'J')
    if letter > 'I' {
        col -= 1;
    }

    let number: usize = chars
        .as_str()
        .parse()
        .map_err(|_| format!("invalid vertex: {s}"))?;
    if col >= size || number == 0 || number > size {
        return Err(format!("vertex off the board: {s}"));
    }
    Ok(Some((col, size - number)))
}

/// Format `(col, row)` as a GTP vertex (e.g. "D4").
pub fn format_vertex(col: usize, row: usize, size: usize) -> String {
    format!("{}{}", column_letter(col), size - row)
}
