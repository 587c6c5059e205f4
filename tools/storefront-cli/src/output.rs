//! Output formatting for the CLI.

use console::{style, Term};
use storefront_commerce::catalog::StockStatus;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row. Cells wider than their column are cut with "...".
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| {
                let cell = console::truncate_str(col, *width, "...");
                format!("{:width$}", cell, width = width)
            })
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

/// Colored stock badge.
pub fn stock_badge(status: StockStatus) -> String {
    match status {
        StockStatus::InStock => style(status.label()).green().to_string(),
        StockStatus::OutOfStock => style(status.label()).red().to_string(),
    }
}

/// "Best Seller" badge, or an empty string.
pub fn best_seller_badge(is_best_seller: bool) -> String {
    if is_best_seller {
        style("Best Seller").yellow().bold().to_string()
    } else {
        String::new()
    }
}

/// Width left for a title column after the fixed columns.
pub fn title_width(term_width: usize, fixed: usize) -> usize {
    term_width.saturating_sub(fixed).clamp(20, 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_width_bounds() {
        assert_eq!(title_width(200, 40), 60);
        assert_eq!(title_width(80, 40), 40);
        assert_eq!(title_width(30, 40), 20);
    }

    #[test]
    fn test_best_seller_badge_empty_when_not_flagged() {
        assert!(best_seller_badge(false).is_empty());
        assert!(best_seller_badge(true).contains("Best Seller"));
    }
}
