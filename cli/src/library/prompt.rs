use std::io;

use console::Term;

/// A yes/no question put to the operator.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

/// Answers with a single key press on the terminal, no Enter needed.
pub struct KeypressConfirm;

impl Confirm for KeypressConfirm {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        let term = Term::stdout();

        term.write_line(prompt)?;

        let key = term.read_char()?;

        Ok(matches!(key, 'y' | 'Y'))
    }
}
