//! # Terminal Input Helper
//!
//! [`Terminal`] repeatedly prompts the user until a line passes a validator.
//! It owns an input source (`BufRead`) and an output sink (`Write`) so the
//! same code drives the real console ([`Terminal::stdio`]) or in-memory
//! buffers in tests.
//!
//! Every operation runs the same loop: print the prompt, read one line, hand
//! it to a [`Validate`] implementation, and either return the value or print
//! the [`Rejection`] message and start over. Caller mistakes (blank prompt,
//! `min > max`, bad token pair, empty menu) are reported as [`PromptError`]
//! before anything is printed or read.
//!
//! ## Example 1: Integer input
//! ```rust,no_run
//! use promptline::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let threads: u8 = terminal.prompt_for_int("Enter scan threads (1-16):", 1, 16)?;
//! println!("Threads: {}", threads);
//! # Ok::<(), promptline::PromptError>(())
//! ```
//!
//! ## Example 2: Scripted input
//! ```rust
//! use std::io::Cursor;
//! use promptline::utils::Terminal;
//!
//! let mut terminal = Terminal::new(Cursor::new("maybe\nY\n"), Vec::new());
//! assert!(terminal.prompt_for_boolean("Continue? (y/n)", "y", "n")?);
//!
//! let (_, out) = terminal.into_inner();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("You must input either \"y\" or \"n\". Please, try again."));
//! # Ok::<(), promptline::PromptError>(())
//! ```
//!
//! ## End of input
//! By default a closed input source is answered like a blank line, forever.
//! Set [`ExhaustedInput::Fail`] through [`PromptConfig`] to get
//! [`PromptError::InputExhausted`] instead.
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::{debug, trace, warn};

use crate::config::{ExhaustedInput, PromptConfig};
use crate::error::PromptError;
use crate::utils::menu::Menu;
use crate::utils::sanitize::{
    Integer, IsBetween, MatchTokens, NotBlank, Rejection, Validate, is_blank,
};

pub struct Terminal<R, W> {
    reader: R,
    writer: W,
    config: PromptConfig,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A terminal bound to the process's stdin and stdout.
    ///
    /// Holds the stdin lock for as long as the terminal lives.
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Terminal {
            reader,
            writer,
            config: PromptConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PromptConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Gives back the input source and output sink.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prints `prompt` and loops until a line passes `validator`.
    ///
    /// All `prompt_for_*` operations are built on this; it is public so
    /// callers can plug in their own [`Validate`] implementations.
    pub fn ask<V: Validate>(
        &mut self,
        prompt: &str,
        validator: &V,
    ) -> Result<V::Output, PromptError> {
        if is_blank(prompt) {
            return Err(PromptError::BlankPrompt);
        }

        let mut attempt: usize = 0;
        loop {
            attempt = attempt.saturating_add(1);
            self.say(prompt)?;

            let rejection = match self.read_line() {
                Ok(Some(line)) => match validator.validate(&line) {
                    Ok(value) => {
                        trace!(attempt, "input accepted");
                        return Ok(value);
                    }
                    Err(rejection) => rejection,
                },
                Ok(None) => {
                    if self.config.on_exhausted == ExhaustedInput::Fail {
                        debug!(attempt, "input source exhausted");
                        return Err(PromptError::InputExhausted);
                    }
                    Rejection::Blank
                }
                Err(e) => {
                    warn!(error = %e, attempt, "failed to read from input source");
                    Rejection::Technical
                }
            };

            debug!(attempt, reason = %rejection, "input rejected");
            self.say(&rejection.to_string())?;
        }
    }

    /// Asks for any non-blank line and returns it untrimmed.
    pub fn prompt_for_string(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt, &NotBlank)
    }

    /// Asks for an integer in the inclusive range `[min, max]`.
    ///
    /// `min > max` fails with [`PromptError::InvalidBounds`] before the prompt
    /// itself is checked.
    pub fn prompt_for_int<T: Integer>(
        &mut self,
        prompt: &str,
        min: T,
        max: T,
    ) -> Result<T, PromptError> {
        let filter = IsBetween::new(min, max)?;
        self.ask(prompt, &filter)
    }

    /// Asks for one of two tokens, compared case-insensitively after trimming.
    /// Returns `true` for `true_token` and `false` for `false_token`.
    pub fn prompt_for_boolean(
        &mut self,
        prompt: &str,
        true_token: &str,
        false_token: &str,
    ) -> Result<bool, PromptError> {
        let filter = MatchTokens::new(true_token, false_token)?;
        self.ask(prompt, &filter)
    }

    /// Prints a numbered menu and returns the chosen 1-based option index, or
    /// `0` when `with_quit` is set and the user quits.
    pub fn prompt_for_menu_selection<S: AsRef<str>>(
        &mut self,
        options: &[S],
        with_quit: bool,
    ) -> Result<usize, PromptError> {
        let menu = Menu::new(options, with_quit)?;
        self.prompt_for_menu(&menu)
    }

    /// Same as [`Terminal::prompt_for_menu_selection`] for a menu built up
    /// front; use [`Menu::option`] to map the answer back to its text.
    pub fn prompt_for_menu(&mut self, menu: &Menu) -> Result<usize, PromptError> {
        let (min, max) = menu.bounds();
        self.prompt_for_int(&menu.render(), min, max)
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// One line without its `\n`, `\r\n` or trailing `\r` terminator, `None`
    /// at end of stream. A `\r` in the middle of a line stays part of it.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();

        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    const BLANK: &str = "Your input cannot be null, empty, or just white space. Please, try again.";
    const TECHNICAL: &str = "There was a technical issue. Please, try again.";

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn strict(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        terminal(input).with_config(PromptConfig::default().exhausted_input(ExhaustedInput::Fail))
    }

    fn output<R: BufRead>(terminal: Terminal<R, Vec<u8>>) -> String {
        let (_, out) = terminal.into_inner();
        String::from_utf8(out).unwrap()
    }

    /// Fails the first `failures` reads, then serves `rest`.
    struct Flaky {
        failures: usize,
        rest: Cursor<Vec<u8>>,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(io::Error::other("device unplugged"));
            }
            self.rest.read(buf)
        }
    }

    /// Reports end of stream `eofs` times, then serves `rest`.
    struct Stutter {
        eofs: usize,
        rest: Cursor<Vec<u8>>,
    }

    impl Read for Stutter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.eofs > 0 {
                self.eofs -= 1;
                return Ok(0);
            }
            self.rest.read(buf)
        }
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_string_returns_raw_line() {
        let mut t = terminal("  hello world \n");
        assert_eq!(t.prompt_for_string("Name?").unwrap(), "  hello world ");
        assert_eq!(output(t), "Name?\n");
    }

    #[test]
    fn test_string_strips_crlf() {
        let mut t = terminal("hi\r\n");
        assert_eq!(t.prompt_for_string("Say").unwrap(), "hi");
    }

    #[test]
    fn test_int_accepts_carriage_return_terminated_last_line() {
        let mut t = strict("42\r");
        assert_eq!(t.prompt_for_int("p", 1, 100).unwrap(), 42);
    }

    #[test]
    fn test_string_last_line_without_newline() {
        let mut t = terminal("tail");
        assert_eq!(t.prompt_for_string("Say").unwrap(), "tail");
    }

    #[test]
    fn test_string_blank_lines_reprompt() {
        let mut t = terminal("\n   \nok\n");
        assert_eq!(t.prompt_for_string("Say").unwrap(), "ok");
        assert_eq!(
            output(t),
            format!("Say\n{BLANK}\nSay\n{BLANK}\nSay\n")
        );
    }

    #[test]
    fn test_blank_prompt_fails_before_io() {
        for prompt in ["", "   ", "\t\n"] {
            let mut t = terminal("hello\n");
            assert!(matches!(
                t.prompt_for_string(prompt),
                Err(PromptError::BlankPrompt)
            ));
            assert!(matches!(
                t.prompt_for_int(prompt, 1, 2),
                Err(PromptError::BlankPrompt)
            ));
            assert!(matches!(
                t.prompt_for_boolean(prompt, "y", "n"),
                Err(PromptError::BlankPrompt)
            ));
            let (reader, out) = t.into_inner();
            assert_eq!(reader.position(), 0);
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_read_error_is_a_technical_issue() {
        let reader = BufReader::new(Flaky {
            failures: 1,
            rest: Cursor::new(b"fine\n".to_vec()),
        });
        let mut t = Terminal::new(reader, Vec::new());
        assert_eq!(t.prompt_for_string("Say").unwrap(), "fine");
        assert_eq!(output(t), format!("Say\n{TECHNICAL}\nSay\n"));
    }

    #[test]
    fn test_exhausted_input_retries_by_default() {
        let reader = BufReader::new(Stutter {
            eofs: 2,
            rest: Cursor::new(b"late\n".to_vec()),
        });
        let mut t = Terminal::new(reader, Vec::new());
        assert_eq!(t.prompt_for_string("Say").unwrap(), "late");
        assert_eq!(
            output(t),
            format!("Say\n{BLANK}\nSay\n{BLANK}\nSay\n")
        );
    }

    #[test]
    fn test_exhausted_input_fails_when_configured() {
        let mut t = strict("");
        assert!(matches!(
            t.prompt_for_string("Say"),
            Err(PromptError::InputExhausted)
        ));
        assert_eq!(output(t), "Say\n");
    }

    #[test]
    fn test_output_failure_is_reported() {
        let mut t = Terminal::new(Cursor::new(b"ok\n".to_vec()), ClosedSink);
        assert!(matches!(
            t.prompt_for_string("Say"),
            Err(PromptError::Output(_))
        ));
    }

    #[test]
    fn test_int_consumes_blank_lines_then_returns() {
        let mut t = terminal("\n  \n42\n");
        assert_eq!(t.prompt_for_int("p", 1, 100).unwrap(), 42);
        let (reader, out) = t.into_inner();
        assert_eq!(reader.position(), 7);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(BLANK).count(), 2);
        assert_eq!(out, format!("p\n{BLANK}\np\n{BLANK}\np\n"));
    }

    #[test]
    fn test_int_rejects_unparseable_and_out_of_range() {
        let mut t = terminal("abc\n0\n101\n 5\n100\n");
        assert_eq!(t.prompt_for_int("p", 1, 100).unwrap(), 100);
        let reminder = "You must enter a number between 1 and 100, Please, try again.";
        assert_eq!(output(t).matches(reminder).count(), 4);
    }

    #[test]
    fn test_int_never_leaves_bounds() {
        let mut t = strict("-3\n-2\n7\n2\n");
        assert_eq!(t.prompt_for_int("p", -2i16, 2).unwrap(), -2);
        assert_eq!(t.prompt_for_int("p", -2i16, 2).unwrap(), 2);
        assert!(matches!(
            t.prompt_for_int("p", -2i16, 2),
            Err(PromptError::InputExhausted)
        ));
    }

    #[test]
    fn test_int_min_greater_than_max_fails_before_io() {
        let mut t = terminal("5\n");
        assert!(matches!(
            t.prompt_for_int("p", 10, 1),
            Err(PromptError::InvalidBounds { .. })
        ));
        // bounds are checked before the prompt
        assert!(matches!(
            t.prompt_for_int("", 10, 1),
            Err(PromptError::InvalidBounds { .. })
        ));
        assert!(output(t).is_empty());
    }

    #[test]
    fn test_boolean_tokens() {
        let mut t = terminal("  YES \nno\n");
        assert!(t.prompt_for_boolean("p", "yes", "no").unwrap());
        assert!(!t.prompt_for_boolean("p", "yes", "no").unwrap());
    }

    #[test]
    fn test_boolean_unknown_token_does_not_return() {
        let mut t = strict("maybe\n");
        assert!(matches!(
            t.prompt_for_boolean("p", "yes", "no"),
            Err(PromptError::InputExhausted)
        ));
        assert_eq!(
            output(t),
            "p\nYou must input either \"yes\" or \"no\". Please, try again.\np\n"
        );
    }

    #[test]
    fn test_boolean_equal_tokens_fail_before_io() {
        let mut t = terminal("x\n");
        assert!(matches!(
            t.prompt_for_boolean("p", "x", "x"),
            Err(PromptError::InvalidTokens)
        ));
        assert!(matches!(
            t.prompt_for_boolean("p", "Yes", "yes"),
            Err(PromptError::InvalidTokens)
        ));
        assert!(output(t).is_empty());
    }

    #[test]
    fn test_menu_with_quit_accepts_zero_to_n() {
        for choice in 0..=3usize {
            let mut t = terminal(&format!("{choice}\n"));
            assert_eq!(
                t.prompt_for_menu_selection(&["A", "B", "C"], true).unwrap(),
                choice
            );
        }
    }

    #[test]
    fn test_menu_with_quit_accepts_negative_zero() {
        let mut t = strict("-0\n");
        assert_eq!(t.prompt_for_menu_selection(&["A", "B", "C"], true).unwrap(), 0);
        assert!(!output(t).contains("You must enter a number"));
    }

    #[test]
    fn test_prompt_for_menu_maps_back_to_option() {
        let menu = Menu::new(&["Scan", "Report"], true).unwrap();
        let mut t = terminal("2\n");
        let selection = t.prompt_for_menu(&menu).unwrap();
        assert_eq!(menu.option(selection), Some("Report"));
    }

    #[test]
    fn test_menu_with_quit_rejects_outside() {
        let mut t = terminal("4\n-1\n2\n");
        assert_eq!(t.prompt_for_menu_selection(&["A", "B", "C"], true).unwrap(), 2);
        let reminder = "You must enter a number between 0 and 3, Please, try again.";
        assert_eq!(output(t).matches(reminder).count(), 2);
    }

    #[test]
    fn test_menu_without_quit_rejects_zero() {
        let mut t = strict("0\n");
        assert!(matches!(
            t.prompt_for_menu_selection(&["A", "B", "C"], false),
            Err(PromptError::InputExhausted)
        ));
        let out = output(t);
        assert!(out.contains("You must enter a number between 1 and 3, Please, try again."));

        for choice in 1..=3usize {
            let mut t = terminal(&format!("{choice}\n"));
            assert_eq!(
                t.prompt_for_menu_selection(&["A", "B", "C"], false).unwrap(),
                choice
            );
        }
    }

    #[test]
    fn test_menu_only_quit_accepts_zero() {
        let options: Vec<String> = Vec::new();
        let mut t = terminal("1\n0\n");
        assert_eq!(t.prompt_for_menu_selection(&options, true).unwrap(), 0);
        assert_eq!(
            output(t),
            "Please choose one of the following:\n\n0) Quit\n\nEnter the number of your selection: \n\
             You must enter a number between 0 and 0, Please, try again.\n\
             Please choose one of the following:\n\n0) Quit\n\nEnter the number of your selection: \n"
        );
    }

    #[test]
    fn test_menu_empty_without_quit_fails_before_io() {
        let options: Vec<String> = Vec::new();
        let mut t = terminal("1\n");
        assert!(matches!(
            t.prompt_for_menu_selection(&options, false),
            Err(PromptError::EmptyMenu)
        ));
        assert!(output(t).is_empty());
    }

    #[test]
    fn test_ask_with_custom_validator() {
        struct Even;

        impl Validate for Even {
            type Output = u32;

            fn validate(&self, line: &str) -> Result<u32, Rejection> {
                match line.parse::<u32>() {
                    Ok(n) if n % 2 == 0 => Ok(n),
                    _ => Err(Rejection::OutOfBounds("0".into(), "even".into())),
                }
            }
        }

        let mut t = terminal("3\n8\n");
        assert_eq!(t.ask("Even number?", &Even).unwrap(), 8);
    }
}
