// crates/domain/src/classify.rs
use std::sync::OnceLock;

use line_filter_shared_kernel::Category;
use regex::Regex;

fn integer_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"))
}

fn float_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?[0-9]*\.[0-9]+(?:[eE][+-]?[0-9]+)?$").expect("float pattern is valid")
    })
}

/// Decide which category `line` belongs to.
///
/// Integers are checked first, so `"42"` never ends up as a float. A float
/// needs at least one digit after the decimal point; `"5."` and `"1e5"` are
/// strings. Everything else, including the empty line, is a string.
pub fn classify(line: &str) -> Category {
    if integer_pattern().is_match(line) {
        Category::Integer
    } else if float_pattern().is_match(line) {
        Category::Float
    } else {
        Category::String
    }
}
