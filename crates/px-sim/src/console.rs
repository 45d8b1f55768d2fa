//! Line-based interactive text boundary.

use std::io::{BufRead, Write};

use px_core::Real;

use crate::error::{SimError, SimResult};

/// "yes"/"y" in any case; everything else is "no".
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// Prompt/response and report channel used by the interpreter.
pub trait Console {
    /// Write one result or diagnostic line.
    fn say(&mut self, line: &str) -> SimResult<()>;

    /// Show `prompt` and block for one line of input. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> SimResult<Option<String>>;

    /// Yes/no question. End of input counts as "no".
    fn confirm(&mut self, question: &str) -> SimResult<bool> {
        Ok(self.ask(question)?.as_deref().is_some_and(is_yes))
    }

    /// Ask for a time value in seconds.
    fn ask_time(&mut self, prompt: &str) -> SimResult<Real> {
        let answer = self.ask(prompt)?.unwrap_or_default();
        let trimmed = answer.trim();
        trimmed.parse::<Real>().map_err(|_| SimError::InvalidInput {
            input: trimmed.to_string(),
        })
    }
}

/// Console over any reader/writer pair (stdin/stdout, or buffers in tests).
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, line: &str) -> SimResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> SimResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn yes_answers() {
        for answer in ["yes", "Y", "YES", " y "] {
            assert!(is_yes(answer), "{answer:?}");
        }
        for answer in ["no", "", "yeah", "n"] {
            assert!(!is_yes(answer), "{answer:?}");
        }
    }

    #[test]
    fn confirm_reads_one_line() {
        let mut term = terminal("Yes\nno\n");
        assert!(term.confirm("first? ").unwrap());
        assert!(!term.confirm("second? ").unwrap());
        assert!(!term.confirm("eof? ").unwrap());
        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out, "first? second? eof? ");
    }

    #[test]
    fn ask_time_parses_numbers() {
        let mut term = terminal("1.25\r\nsoon\n");
        assert_eq!(term.ask_time("t? ").unwrap(), 1.25);
        let err = term.ask_time("t? ").unwrap_err();
        assert!(matches!(err, SimError::InvalidInput { ref input } if input == "soon"));
        assert!(matches!(
            term.ask_time("t? ").unwrap_err(),
            SimError::InvalidInput { .. }
        ));
    }

    #[test]
    fn say_writes_lines() {
        let mut term = terminal("");
        term.say("one").unwrap();
        term.say("two").unwrap();
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "one\ntwo\n");
    }
}
