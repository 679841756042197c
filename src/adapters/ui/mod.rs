pub mod banner;
pub mod tui;

/// Prints the welcome banner. Call once at startup, before the form loop.
pub fn init_ui(endpoint: &str, mock: bool) {
    banner::print_welcome(endpoint, mock);
}
