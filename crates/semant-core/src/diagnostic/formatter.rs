//! Color-aware diagnostic formatter
//!
//! Respects the NO_COLOR environment variable and auto-detects terminal
//! capabilities.

use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use semant_config::ColorPreference;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Color mode for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Never use colors
    Never,
    /// Auto-detect terminal capabilities
    Auto,
}

impl ColorMode {
    /// Resolve to a termcolor ColorChoice
    pub fn to_color_choice(self) -> ColorChoice {
        // Always respect NO_COLOR (https://no-color.org)
        if std::env::var("NO_COLOR").is_ok() {
            return ColorChoice::Never;
        }
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => ColorChoice::Auto,
        }
    }
}

impl From<ColorPreference> for ColorMode {
    fn from(pref: ColorPreference) -> Self {
        match pref {
            ColorPreference::Auto => ColorMode::Auto,
            ColorPreference::Always => ColorMode::Always,
            ColorPreference::Never => ColorMode::Never,
        }
    }
}

/// Diagnostic formatter with color support
pub struct DiagnosticFormatter {
    color_mode: ColorMode,
}

impl DiagnosticFormatter {
    /// Create a new formatter with the given color mode
    pub fn new(color_mode: ColorMode) -> Self {
        Self { color_mode }
    }

    /// Create a formatter that auto-detects color support
    pub fn auto() -> Self {
        Self::new(ColorMode::Auto)
    }

    /// Create a plain (no color) formatter
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Format a diagnostic to a string (without colors)
    pub fn format_to_string(&self, diag: &Diagnostic) -> String {
        diag.to_human_string()
    }

    /// Format a diagnostic with colors to stderr
    pub fn emit(&self, diag: &Diagnostic) {
        let mut stream = StandardStream::stderr(self.color_mode.to_color_choice());
        let _ = self.write_diagnostic(&mut stream, diag);
    }

    /// Format multiple diagnostics
    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Format a diagnostic with colors to a WriteColor sink
    pub fn write_diagnostic(
        &self,
        w: &mut impl WriteColor,
        diag: &Diagnostic,
    ) -> std::io::Result<()> {
        self.write_header(w, diag)?;
        self.write_location(w, diag)?;

        if !diag.label.is_empty() {
            self.write_gutter(w, "   | ")?;
            writeln!(w, "{}", diag.label)?;
        }

        for note in &diag.notes {
            self.write_annotation(w, "note", Color::White, note)?;
        }

        if let Some(help) = &diag.help {
            self.write_annotation(w, "help", Color::Green, help)?;
        }

        writeln!(w)?;
        Ok(())
    }

    /// Format a diagnostic to a buffer (for testing)
    pub fn format_to_buffer(&self, diag: &Diagnostic) -> Vec<u8> {
        let mut buf = termcolor::Buffer::no_color();
        let _ = self.write_diagnostic(&mut buf, diag);
        buf.into_inner()
    }

    fn write_header(&self, w: &mut impl WriteColor, diag: &Diagnostic) -> std::io::Result<()> {
        let color = match diag.level {
            DiagnosticLevel::Error => Color::Red,
        };

        w.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(w, "{}[{}]", diag.level, diag.code)?;
        w.reset()?;

        w.set_color(ColorSpec::new().set_bold(true))?;
        write!(w, ": {}", diag.message)?;
        w.reset()?;
        writeln!(w)?;
        Ok(())
    }

    fn write_location(&self, w: &mut impl WriteColor, diag: &Diagnostic) -> std::io::Result<()> {
        self.write_gutter(w, "  --> ")?;
        writeln!(w, "{}", diag.location())?;
        Ok(())
    }

    fn write_annotation(
        &self,
        w: &mut impl WriteColor,
        label: &str,
        color: Color,
        text: &str,
    ) -> std::io::Result<()> {
        self.write_gutter(w, "   = ")?;

        w.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(w, "{}", label)?;
        w.reset()?;

        writeln!(w, ": {}", text)?;
        Ok(())
    }

    fn write_gutter(&self, w: &mut impl WriteColor, gutter: &str) -> std::io::Result<()> {
        w.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(w, "{}", gutter)?;
        w.reset()
    }
}

impl Default for DiagnosticFormatter {
    fn default() -> Self {
        Self::auto()
    }
}
