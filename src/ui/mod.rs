pub mod components;

pub use components::{prompt_root, render_menu};
