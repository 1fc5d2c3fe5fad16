pub mod paths;
pub mod terminal;

pub use paths::{encode_key, format_path_with_tilde};
pub use terminal::sanitize_for_display;
