//! Naming helpers for Kubernetes objects

/// Longest name a Kubernetes object may carry
pub const MAX_NAME_LENGTH: usize = 253;

const DIGIT_PREFIX: &str = "hwp-";
const GENERATED_PREFIX: &str = "hardware-profile-";

/// Translate a free-form display name into a valid Kubernetes object name.
///
/// Lowercases, turns whitespace into `-`, drops anything outside
/// `[a-z0-9-]`, collapses dash runs and trims leading/trailing dashes.
/// Names starting with a digit get a prefix; names that end up empty get a
/// generated one.
pub fn translate_display_name_for_k8s(display_name: &str) -> String {
    let mut translated = String::with_capacity(display_name.len());
    for c in display_name.trim().chars().flat_map(char::to_lowercase) {
        let c = if c.is_whitespace() { '-' } else { c };
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            continue;
        }
        if c == '-' && translated.ends_with('-') {
            continue;
        }
        translated.push(c);
    }

    let trimmed = translated.trim_matches('-');
    let mut name = if trimmed.is_empty() {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("{}{}", GENERATED_PREFIX, &suffix[..5])
    } else if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{}{}", DIGIT_PREFIX, trimmed)
    } else {
        trimmed.to_string()
    };

    if name.len() > MAX_NAME_LENGTH {
        name.truncate(MAX_NAME_LENGTH);
        let end = name.trim_end_matches('-').len();
        name.truncate(end);
    }
    name
}
