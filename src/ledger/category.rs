//! Category suggestions offered by the entry form.

/// Category preselected on a fresh draft.
pub const DEFAULT_CATEGORY: &str = "Salary";

/// Fixed suggestion list shown in the category picker. Committed transactions
/// may carry any label; this list is never used for validation.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Salary", "Groceries", "Bills"];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect()
}

/// Returns true when `name` matches one of `suggestions`, ignoring case.
pub fn is_suggested(suggestions: &[String], name: &str) -> bool {
    let name = name.trim();
    suggestions
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(name))
}
