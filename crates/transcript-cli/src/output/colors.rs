//! ANSI color helpers for terminal output

use colored::Colorize;

/// Get colored timestamp
pub fn colored_time(timestamp: &str) -> String {
    timestamp.white().dimmed().to_string()
}

/// Get colored chapter title
pub fn colored_chapter(title: &str) -> String {
    title.magenta().bold().to_string()
}

/// Get colored match score
pub fn colored_score(score: f64) -> String {
    let text = format!("{:.2}", score);
    if score >= 0.9 {
        text.green().to_string()
    } else if score >= 0.6 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored label
pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Get colored success message
pub fn success(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Get colored warning message
pub fn warning(text: &str) -> String {
    format!("{} {}", "⚠".yellow(), text)
}
