#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;

pub mod structured_error;

pub use structured_error::StructuredError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

/// Leveled logger writing to stderr, so stdout stays free for results.
///
/// Debug lines are dropped unless debug output was switched on.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    debug_enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debug(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if level == LogLevel::Debug && !self.debug_enabled {
            return;
        }
        self.print_line(level, message.as_ref());
    }

    /// Log a structured error with its code, context and help lines
    pub fn log_structured_error(&self, error: &StructuredError) {
        self.log(LogLevel::Error, &error.message);
        for (label, content) in error.build_colored_details() {
            self.print_colored_detail(&label, &content);
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    /// Format: "   ↳ label: content" with the label in grey
    #[cfg(feature = "cli")]
    fn print_colored_detail(&self, label: &str, content: &str) {
        let mut output = String::new();
        output.push_str("   ↳ ");

        output.push_str(&format!(
            "{}{}{}{}",
            SetForegroundColor(Color::Rgb {
                r: 110,
                g: 110,
                b: 110
            }),
            SetAttribute(Attribute::Bold),
            label,
            SetAttribute(Attribute::Reset)
        ));

        output.push_str(": ");
        output.push_str(&format!("{}{}", SetForegroundColor(Color::White), content));
        output.push_str(&format!("{}", ResetColor));

        eprintln!("{}", output);
    }

    #[cfg(not(feature = "cli"))]
    fn print_colored_detail(&self, label: &str, content: &str) {
        eprintln!("   -> {}: {}", label, content);
    }

    fn print_line(&self, level: LogLevel, message: &str) {
        #[cfg(feature = "cli")]
        {
            eprintln!("{}", self.render_colored_line(level, message));
        }
        #[cfg(not(feature = "cli"))]
        {
            eprintln!("{}", render_plain_line(level, message));
        }
    }

    #[cfg(feature = "cli")]
    fn render_colored_line(&self, level: LogLevel, message: &str) -> String {
        let mut out = String::new();
        out.push_str(&self.render_signature());
        out.push(' ');
        out.push_str(&self.render_status(level, level.color()));
        out.push(' ');
        out.push_str(message);
        out
    }

    #[cfg(feature = "cli")]
    fn render_signature(&self) -> String {
        let mut s = String::new();
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 36,
                g: 199,
                b: 181,
            })
        );
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str("addrspan");
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }

    #[cfg(feature = "cli")]
    fn render_status(&self, level: LogLevel, color: Color) -> String {
        let mut s = String::new();
        let _ = write!(&mut s, "{}", SetForegroundColor(color));
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push('[');
        s.push_str(level.as_label());
        s.push(']');
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", ResetColor);
        s
    }
}

/// `[addrspan] [LEVEL] message`
pub fn render_plain_line(level: LogLevel, message: &str) -> String {
    format!("[addrspan] [{}] {}", level.as_label(), message)
}

impl LogLevel {
    pub fn as_label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    #[cfg(feature = "cli")]
    fn color(self) -> Color {
        match self {
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Debug => Color::Rgb {
                r: 121,
                g: 134,
                b: 203,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_off_by_default() {
        assert!(!Logger::new().debug_enabled());
        assert!(Logger::with_debug(true).debug_enabled());
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(
            render_plain_line(LogLevel::Info, "3 dependencies"),
            "[addrspan] [INFO] 3 dependencies"
        );
        assert_eq!(
            render_plain_line(LogLevel::Error, "bad block"),
            "[addrspan] [ERROR] bad block"
        );
        assert_eq!(LogLevel::Debug.as_label(), "DEBUG");
    }
}
