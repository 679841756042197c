//! Welcome banner: figlet title, then where submissions will go.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE_COLOR: Color = Color::Cyan;
const HINT_COLOR: Color = Color::DarkGrey;

/// Title art in the figlet standard font, or the plain name if the font is unavailable.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("Career Nav").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "CAREER NAVIGATOR\n".to_string())
}

/// Line describing the analysis source for this session.
pub fn source_hint(endpoint: &str, mock: bool) -> String {
    if mock {
        "Analyzing with built-in sample roles (mock mode)".to_string()
    } else {
        format!("Analyzing with {}", endpoint)
    }
}

/// Prints the title, version and session hints. Output errors are ignored.
pub fn print_welcome(endpoint: &str, mock: bool) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(TITLE_COLOR));
    let _ = out.execute(Print(title_art().replace('\n', "\r\n")));
    let _ = out.execute(SetForegroundColor(HINT_COLOR));
    let _ = out.execute(Print(format!(
        "v{}  {}\r\nEnter a job title to see your skill gap. Esc to quit.\r\n",
        env!("CARGO_PKG_VERSION"),
        source_hint(endpoint, mock)
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
