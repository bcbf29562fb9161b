//! Terminal helpers
//!
//! `init_terminal` enters raw mode and the alternate screen, and installs a
//! panic hook that restores the terminal before the previous hook prints.
//! `restore_terminal` undoes both on a normal exit.

mod terminal;

pub use terminal::{Term, init_terminal, restore_terminal};
