//! # Numbered menus
//!
//! A [`Menu`] renders a list of options as numbered lines (`1) ...`, `2) ...`)
//! with an optional `0) Quit` entry, and knows which numbers are valid
//! answers. [`crate::utils::Terminal::prompt_for_menu_selection`] builds one,
//! prints it and reads the selection through an integer prompt.
//!
//! ```rust
//! use promptline::utils::Menu;
//!
//! let menu = Menu::new(&["Scan", "Report"], true).unwrap();
//! assert_eq!(menu.bounds(), (0, 2));
//! assert_eq!(
//!     menu.render(),
//!     "Please choose one of the following:\n\n1) Scan\n2) Report\n\n0) Quit\n\nEnter the number of your selection: "
//! );
//! ```
use std::fmt::Write;

use crate::error::PromptError;

const HEADER: &str = "Please choose one of the following:\n\n";
const QUIT: &str = "0) Quit\n\n";
const FOOTER: &str = "Enter the number of your selection: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    options: Vec<String>,
    with_quit: bool,
}

impl Menu {
    /// Fails with [`PromptError::EmptyMenu`] when there is nothing to select.
    pub fn new<S: AsRef<str>>(options: &[S], with_quit: bool) -> Result<Self, PromptError> {
        if options.is_empty() && !with_quit {
            return Err(PromptError::EmptyMenu);
        }

        Ok(Menu {
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            with_quit,
        })
    }

    /// Inclusive range of accepted answers: `0` only exists with quit, the
    /// upper bound is the number of options.
    pub fn bounds(&self) -> (usize, usize) {
        let min = if self.with_quit { 0 } else { 1 };
        (min, self.options.len())
    }

    /// Option text for a 1-based selection. `0` (quit) and out of range
    /// numbers yield `None`.
    pub fn option(&self, selection: usize) -> Option<&str> {
        selection
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn render(&self) -> String {
        let mut menu = String::from(HEADER);

        for (i, option) in self.options.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(menu, "{}) {}", i + 1, option);
        }
        if !self.options.is_empty() {
            menu.push('\n');
        }

        if self.with_quit {
            menu.push_str(QUIT);
        }

        menu.push_str(FOOTER);
        menu
    }
}
