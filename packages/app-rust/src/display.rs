//! Terminal output for the exercise program.
//!
//! Uses owo-colors for terminal coloring; every line goes through the
//! wrapped writer so output can be captured.

use std::io::{self, Write};

use chrono::{Local, TimeZone};
use owo_colors::{OwoColorize, Style};
use promisify_core::OperationError;

use crate::api::Person;

/// Style for section headers (yellow).
fn header_style() -> Style {
    Style::new().yellow()
}

/// Style for person names (green).
fn name_style() -> Style {
    Style::new().green()
}

/// Formats epoch milliseconds in `tz` as `%Y-%m-%d %H:%M:%S`.
///
/// Values outside chrono's range fall back to the raw number.
pub fn format_server_time<Tz>(millis: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    i64::try_from(millis)
        .ok()
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map_or_else(
            || millis.to_string(),
            |time| time.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}

/// Writes the exercise output to any `Write` sink.
#[derive(Debug)]
pub struct Printer<W> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        let line = self.styled(title, header_style());
        writeln!(self.out, "{line}")
    }

    /// Writes ` - <name>, <age>, <role|occupation>`.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn person(&mut self, person: &Person) -> io::Result<()> {
        let name = self.styled(person.name(), name_style());
        writeln!(self.out, " - {name}, {}, {}", person.age(), person.detail())
    }

    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn server_time(&mut self, millis: u64) -> io::Result<()> {
        writeln!(self.out, "   {}", format_server_time(millis, &Local))
    }

    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn queue_length(&mut self, length: u64) -> io::Result<()> {
        writeln!(self.out, "   {length}")
    }

    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Final line: success, or the failure reason with an acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn report(&mut self, outcome: &Result<(), OperationError>) -> io::Result<()> {
        match outcome {
            Ok(()) => writeln!(self.out, "Success!"),
            Err(e) => writeln!(
                self.out,
                "Error: \"{}\", but it's fine, sometimes errors are inevitable.",
                e.message()
            ),
        }
    }
}
