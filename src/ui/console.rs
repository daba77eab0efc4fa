use crate::error::InputError;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented prompt/response channel.
///
/// Every read is strict: a value that does not parse is returned as an
/// [`InputError`] rather than re-prompted or defaulted.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> Result<(), InputError> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Shows `prompt` and returns the next line without its line ending.
    pub fn prompt_line(&mut self, prompt: &str, field: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(InputError::UnexpectedEof {
                field: field.to_string(),
            });
        }
        Ok(input.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn prompt_integer<T: FromStr>(&mut self, prompt: &str, field: &str) -> Result<T, InputError> {
        let line = self.prompt_line(prompt, field)?;
        let value = line.trim();
        value.parse().map_err(|_| InputError::InvalidInteger {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    pub fn prompt_real(&mut self, prompt: &str, field: &str) -> Result<f64, InputError> {
        let line = self.prompt_line(prompt, field)?;
        let value = line.trim();
        value.parse().map_err(|_| InputError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    /// Accepts `true` or `false` in any letter case.
    pub fn prompt_bool(&mut self, prompt: &str, field: &str) -> Result<bool, InputError> {
        let line = self.prompt_line(prompt, field)?;
        let value = line.trim();
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(InputError::InvalidBoolean {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
    }
}
