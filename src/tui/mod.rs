// Interactive journaling interface
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use anyhow::Result;
pub use app::App;
pub use timestamps::{format_full_timestamp, format_timestamp};

use self::terminal::TerminalManager;
use crate::controller::ViewController;
use crate::store::KeyValueBackend;

/// Run the interactive TUI until the user quits
pub fn run_interactive<B: KeyValueBackend>(controller: ViewController<B>) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(controller);

    let res = app.run(manager.terminal_mut());

    // Restore before surfacing the loop error so it prints on a sane terminal
    manager.restore()?;
    res
}
