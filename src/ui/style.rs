use console::style;
use std::fmt::Display;

/// Cyan bold: the visitor's own turns
pub fn user_label<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Green bold: assistant turns
pub fn assistant_label<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Dim: citations, counters, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow bold: the limit banner and rejections
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().bold().to_string()
}

/// White bold: section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Cyan underlined: URLs
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}
