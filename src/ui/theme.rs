//! Visual theme and styling.

use console::Style;

/// The report's visual theme.
#[derive(Debug, Clone)]
pub struct DoctorTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for module tags such as `(:lang . python)` (bold).
    pub module: Style,
}

impl Default for DoctorTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            module: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            module: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a module tag line.
    pub fn format_module(&self, tag: &str) -> String {
        self.module.apply_to(tag).to_string()
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("✚"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = DoctorTheme::plain();
        let msg = theme.format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_module_tag() {
        let theme = DoctorTheme::plain();
        assert_eq!(theme.format_module("(:lang . python)"), "(:lang . python)");
    }

    #[test]
    fn theme_formats_error() {
        let theme = DoctorTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = DoctorTheme::plain();
        let msg = theme.format_header("Checking modules");
        assert!(msg.contains("Checking modules"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = DoctorTheme::default();
        let new = DoctorTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
