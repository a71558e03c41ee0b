// Output capture for the demonstrations

use std::io::{self, Write};

use crossterm::style::{style, Stylize};

use crate::theme::Theme;

/// What a transcript line is, for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Banner,
    Heading,
    Body,
    Hazard,
    Success,
}

/// A line of output tagged with the demonstration that produced it
#[derive(Debug, Clone)]
pub struct TerminalLine {
    pub text: String,
    pub kind: LineKind,
    pub section: usize, // 0 before the first demo
}

/// Recorded program output
///
/// Demonstrations write here instead of straight to stdout so tests can inspect
/// what each one printed.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub lines: Vec<TerminalLine>,
    section: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript {
            lines: Vec::new(),
            section: 0,
        }
    }

    pub fn banner(&mut self, text: impl Into<String>) {
        self.push(text.into(), LineKind::Banner);
    }

    /// Start a new numbered section
    pub fn heading(&mut self, text: impl Into<String>) {
        self.section += 1;
        self.push(text.into(), LineKind::Heading);
    }

    pub fn println(&mut self, text: impl Into<String>) {
        self.push(text.into(), LineKind::Body);
    }

    pub fn hazard(&mut self, text: impl Into<String>) {
        self.push(text.into(), LineKind::Hazard);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text.into(), LineKind::Success);
    }

    pub fn blank(&mut self) {
        self.push(String::new(), LineKind::Body);
    }

    fn push(&mut self, text: String, kind: LineKind) {
        self.lines.push(TerminalLine {
            text,
            kind,
            section: self.section,
        });
    }

    /// Get all lines as plain strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }

    /// Lines written by the `n`-th section (1-based), heading included
    pub fn section(&self, n: usize) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.section == n)
            .map(|l| l.text.as_str())
            .collect()
    }

    /// Write every line to `out`, colored with `theme` when `styled` is set
    pub fn render<W: Write>(&self, out: &mut W, theme: &Theme, styled: bool) -> io::Result<()> {
        for line in &self.lines {
            if !styled {
                writeln!(out, "{}", line.text)?;
                continue;
            }
            let text = style(line.text.as_str());
            let styled_text = match line.kind {
                LineKind::Banner => text.with(theme.banner).bold(),
                LineKind::Heading => text.with(theme.heading).bold(),
                LineKind::Hazard => text.with(theme.hazard),
                LineKind::Success => text.with(theme.success),
                LineKind::Body => text.with(theme.fg),
            };
            writeln!(out, "{}", styled_text)?;
        }
        out.flush()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_THEME;

    #[test]
    fn test_sections_are_numbered_by_heading() {
        let mut t = Transcript::new();
        t.banner("=== START ===");
        t.heading("1. FIRST");
        t.println("a");
        t.heading("2. SECOND");
        t.println("b");

        assert_eq!(t.section(0), vec!["=== START ==="]);
        assert_eq!(t.section(1), vec!["1. FIRST", "a"]);
        assert_eq!(t.section(2), vec!["2. SECOND", "b"]);
    }

    #[test]
    fn test_plain_render() {
        let mut t = Transcript::new();
        t.heading("1. FIRST");
        t.blank();
        t.hazard("careful");

        let mut buf = Vec::new();
        t.render(&mut buf, &DEFAULT_THEME, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1. FIRST\n\ncareful\n");
    }

    #[test]
    fn test_styled_render_keeps_text() {
        let mut t = Transcript::new();
        t.banner("=== START ===");

        let mut buf = Vec::new();
        t.render(&mut buf, &DEFAULT_THEME, true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("=== START ==="));
        assert!(out.ends_with('\n'));
    }
}
