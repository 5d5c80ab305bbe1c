//! This crate contains the source code for the binary for the game mazequest.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazequest::{logging, App, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    // Validate the configuration before the terminal switches to the alternate screen
    let mut app = App::new(&cli)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
