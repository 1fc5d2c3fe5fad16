//! Which screen is active and how user actions move between screens.

mod screen;
mod view;

pub use screen::{Screen, ScreenKind};
pub use view::{SaveOutcome, ViewController};
