use std::io::{BufRead, Write};

use prioritize::{Comparator, OracleError, Verdict};
use tracing::debug;

/// Asks a person at a terminal which of two items is the higher priority.
/// Items are indices into `labels`.
pub struct Prompt<'a, R, W> {
    labels: &'a [String],
    input: R,
    output: W,
    asked: usize,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub fn new(labels: &'a [String], input: R, output: W) -> Self {
        Prompt { labels, input, output, asked: 0 }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> usize {
        self.asked
    }

    fn label(&self, i: usize) -> Result<&'a str, OracleError> {
        let labels = self.labels;
        labels
            .get(i)
            .map(String::as_str)
            .ok_or_else(|| OracleError::contract(format!("no item with index {i}")))
    }
}

impl<R: BufRead, W: Write> Comparator<usize> for Prompt<'_, R, W> {
    fn compare(&mut self, first: &usize, second: &usize) -> Result<Verdict, OracleError> {
        let a = self.label(*first)?;
        let b = self.label(*second)?;
        self.asked += 1;
        writeln!(self.output, "\nWhich is higher priority? ({})", self.asked)?;
        writeln!(self.output, "  [1] {a}")?;
        writeln!(self.output, "  [2] {b}")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(OracleError::aborted("input closed before an answer was given"));
            }
            match line.trim() {
                "1" => return Ok(Verdict::First),
                "2" => return Ok(Verdict::Second),
                "q" | "quit" => return Err(OracleError::aborted("quit")),
                other => {
                    debug!(answer = other, "unrecognized answer");
                    writeln!(self.output, "Please answer 1 or 2 (or q to quit).")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn labels() -> Vec<String> {
        vec!["taxes".to_string(), "laundry".to_string()]
    }

    #[test]
    fn answers() {
        let labels = labels();
        let mut out = Vec::new();
        let mut p = Prompt::new(&labels, Cursor::new("2\n1\n"), &mut out);
        assert_eq!(p.compare(&0, &1).unwrap(), Verdict::Second);
        assert_eq!(p.compare(&1, &0).unwrap(), Verdict::First);
        assert_eq!(p.asked(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1] taxes\n  [2] laundry"));
        assert!(text.contains("[1] laundry\n  [2] taxes"));
    }

    #[test]
    fn reprompts_until_definite() {
        let labels = labels();
        let mut out = Vec::new();
        let mut p = Prompt::new(&labels, Cursor::new("both\n\n 1 \n"), &mut out);
        assert_eq!(p.compare(&0, &1).unwrap(), Verdict::First);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please answer 1 or 2").count(), 2);
    }

    #[test]
    fn eof_aborts() {
        let labels = labels();
        let mut p = Prompt::new(&labels, Cursor::new("maybe\n"), Vec::new());
        assert!(matches!(p.compare(&0, &1), Err(OracleError::Aborted(_))));
    }

    #[test]
    fn quit_aborts() {
        let labels = labels();
        let mut p = Prompt::new(&labels, Cursor::new("q\n"), Vec::new());
        assert!(matches!(p.compare(&0, &1), Err(OracleError::Aborted(_))));
    }

    #[test]
    fn unknown_index() {
        let labels = labels();
        let mut p = Prompt::new(&labels, Cursor::new("1\n"), Vec::new());
        assert!(matches!(p.compare(&0, &2), Err(OracleError::Contract(_))));
    }
}
