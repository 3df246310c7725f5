//! Ordered header lines with case-insensitive lookup.
//!
//! # Responsibilities
//! - Keep header lines in insertion order
//! - Look up and remove headers by name, ignoring ASCII case
//!
//! # Design Decisions
//! - Lines are stored raw (`Name: value`) so malformed headers can be scripted
//! - No operation fails; removing an absent header is a no-op

use std::fmt::Display;

/// Ordered collection of raw `Name: value` header lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    lines: Vec<String>,
}

impl HeaderList {
    /// Create an empty header list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw header line. The line is not validated.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append `name: value`.
    pub fn add(&mut self, name: &str, value: impl Display) {
        self.lines.push(format!("{}: {}", name, value));
    }

    /// Replace every header called `name` with a single `name: value`.
    pub fn set(&mut self, name: &str, value: impl Display) {
        self.remove(name);
        self.add(name, value);
    }

    /// Remove every header called `name`, ignoring case.
    pub fn remove(&mut self, name: &str) {
        self.lines.retain(|line| !line_has_name(line, name));
    }

    /// Remove all headers.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Value of the first header called `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line_has_name(line, name))
            .map(|line| &line[name.len() + 2..])
    }

    /// Whether any header is called `name`, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Header lines in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter().map(String::as_str as fn(&String) -> &str)
    }
}

/// Matches the `name: ` prefix of a raw header line.
fn line_has_name(line: &str, name: &str) -> bool {
    let line = line.as_bytes();
    let name = name.as_bytes();
    line.len() >= name.len() + 2
        && line[..name.len()].eq_ignore_ascii_case(name)
        && &line[name.len()..name.len() + 2] == b": "
}
