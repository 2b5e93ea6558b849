use std::fmt::Display;
use std::io::{BufRead, Write};

use issue_loadtest::error::AppResult;

/// Line-oriented question/answer over any reader and writer.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn say(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `message` and reads one trimmed line. `None` on end of input.
    pub(crate) fn ask(&mut self, message: &str) -> AppResult<Option<String>> {
        write!(self.output, "\n{}: ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Repeats the question until `parse` accepts the answer, printing each
    /// rejection. `None` on end of input.
    pub(crate) fn ask_until<T, E, F>(
        &mut self,
        message: &str,
        mut parse: F,
    ) -> AppResult<Option<T>>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            let Some(answer) = self.ask(message)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(&err.to_string())?,
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
