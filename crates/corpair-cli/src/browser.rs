//! Interactive dataset browsing.
//!
//! Cursor state lives in the session value and every command goes through
//! one dispatch point. Input and output are injected so the loop can be
//! driven by scripted readers in tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use corpair_types::DatasetRecord;

use crate::render;

pub struct BrowseSession<R: BufRead, W: Write> {
    records: Vec<DatasetRecord>,
    current: usize,
    truncate_lines: usize,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BrowseSession<R, W> {
    pub fn new(records: Vec<DatasetRecord>, truncate_lines: usize, reader: R, writer: W) -> Self {
        Self {
            records,
            current: 0,
            truncate_lines,
            reader,
            writer,
        }
    }

    /// Current 0-based cursor position.
    #[cfg(test)]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Run until `q` or end of input.
    pub fn run(&mut self) -> Result<()> {
        if self.records.is_empty() {
            writeln!(self.writer, "Dataset is empty; nothing to browse.")?;
            return Ok(());
        }

        loop {
            self.show_current()?;

            let Some(line) = self.read_line()? else {
                break; // end of input counts as quit
            };

            if !self.dispatch(line.trim())? {
                break;
            }
        }

        Ok(())
    }

    fn show_current(&mut self) -> Result<()> {
        writeln!(self.writer, "\n{}", "=".repeat(render::BANNER_WIDTH))?;
        writeln!(self.writer, "Entry {}/{}", self.current + 1, self.records.len())?;
        render::write_record(
            &mut self.writer,
            &self.records[self.current],
            false,
            self.truncate_lines,
        )?;
        writeln!(
            self.writer,
            "\nCommands: [n]ext, [p]rev, [f]ull, [i]nlined regions, entry number to jump, [q]uit"
        )?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Returns false when the loop should stop.
    fn dispatch(&mut self, command: &str) -> Result<bool> {
        let len = self.records.len();
        match command.to_lowercase().as_str() {
            "n" => self.current = (self.current + 1) % len,
            "p" => self.current = (self.current + len - 1) % len,
            "f" => {
                render::write_record(
                    &mut self.writer,
                    &self.records[self.current],
                    true,
                    self.truncate_lines,
                )?;
                if !self.pause()? {
                    return Ok(false);
                }
            }
            "i" => {
                render::write_regions(&mut self.writer, &self.records[self.current])?;
                if !self.pause()? {
                    return Ok(false);
                }
            }
            "q" => return Ok(false),
            other if !other.is_empty() && other.bytes().all(|b| b.is_ascii_digit()) => {
                self.jump(other)?;
            }
            // anything else redisplays the current entry
            _ => {}
        }
        Ok(true)
    }

    /// Jump to a 1-based entry number; out-of-range input leaves the cursor
    /// where it was.
    fn jump(&mut self, digits: &str) -> Result<()> {
        let len = self.records.len();
        match digits.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => self.current = n - 1,
            _ => writeln!(
                self.writer,
                "error: index {} out of range (valid: 1-{})",
                digits, len
            )?,
        }
        Ok(())
    }

    /// Wait for Enter; false means input ran out.
    fn pause(&mut self) -> Result<bool> {
        writeln!(self.writer, "\nPress Enter to continue...")?;
        Ok(self.read_line()?.is_some())
    }
}
