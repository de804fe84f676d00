//! Formatting utilities for terminal output

/// Format guessed letters in the order they were tried, e.g. `[p, x]`
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    let joined: Vec<String> = letters.iter().map(char::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Mistake budget as a bar relative to the most lenient mode
#[must_use]
pub fn budget_bar(budget: u32, max_budget: u32, width: usize) -> String {
    create_progress_bar(f64::from(budget), f64::from(max_budget.max(1)), width)
}
