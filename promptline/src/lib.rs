//! # Promptline
//!
//! Blocking prompt-and-validate helpers for interactive terminal programs.
//! Each prompt is printed, one line is read, and the line is validated; bad
//! answers get a message and the prompt repeats until the answer is good.
//!
//! ## Features
//!
//! - **Free text** - any non-blank line, returned exactly as typed
//! - **Bounded integers** - any primitive integer type within an inclusive range
//! - **Yes/no tokens** - two case-insensitive tokens mapped to `bool`
//! - **Numbered menus** - `1..=N` selections with an optional `0) Quit`
//! - **Injected I/O** - any `BufRead` / `Write` pair, so sessions can be scripted
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use promptline::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//!
//! let name = terminal.prompt_for_string("What is your name?")?;
//! let age: u8 = terminal.prompt_for_int("How old are you?", 0, 130)?;
//! let likes_rust = terminal.prompt_for_boolean("You like Rust? (y/n)", "y", "n")?;
//!
//! match terminal.prompt_for_menu_selection(&["Scan", "Report"], true)? {
//!     0 => println!("Bye {}", name),
//!     n => println!("{} ({}, rust: {}) picked option {}", name, age, likes_rust, n),
//! }
//! # Ok::<(), promptline::PromptError>(())
//! ```
//!
//! ## Custom validation
//!
//! [`utils::Terminal::ask`] accepts anything implementing [`utils::Validate`]:
//!
//! ```rust
//! use std::io::Cursor;
//! use promptline::utils::{Rejection, Terminal, Validate};
//!
//! struct Port;
//!
//! impl Validate for Port {
//!     type Output = u16;
//!
//!     fn validate(&self, line: &str) -> Result<u16, Rejection> {
//!         match line.trim().parse::<u16>() {
//!             Ok(p) if p != 0 => Ok(p),
//!             _ => Err(Rejection::OutOfBounds("1".into(), "65535".into())),
//!         }
//!     }
//! }
//!
//! let mut terminal = Terminal::new(Cursor::new("0\n8080\n"), Vec::new());
//! assert_eq!(terminal.ask("Port:", &Port)?, 8080);
//! # Ok::<(), promptline::PromptError>(())
//! ```
//!
//! ## Error Handling
//!
//! Wrong answers from the user are never errors; they are retried. Mistakes
//! by the calling program are returned as [`PromptError`] before any I/O:
//!
//! ```rust
//! use std::io::Cursor;
//! use promptline::{PromptError, utils::Terminal};
//!
//! let mut terminal = Terminal::new(Cursor::new("yes\n"), Vec::new());
//! match terminal.prompt_for_boolean("Sure?", "Yes", "YES") {
//!     Err(PromptError::InvalidTokens) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Limitations
//!
//! - Prompts block the calling thread until a valid answer arrives.
//! - With the default [`ExhaustedInput::Retry`], a closed input source makes a
//!   prompt loop forever. Opt into [`ExhaustedInput::Fail`] to stop instead.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod config;
pub mod error;
pub mod utils;

pub use config::{ExhaustedInput, PromptConfig};
pub use error::{PromptError, Result};
