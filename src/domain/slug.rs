// src/domain/slug.rs
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("static regex"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("static regex"));
static NON_CATEGORY_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_ ]+").expect("static regex"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("static regex"));

/// Turns a post title into a URL-safe identifier.
///
/// Lowercases, trims, replaces whitespace runs with `-`, drops anything that
/// is not an ASCII word character or `-`, then collapses repeated hyphens.
/// The result is not guaranteed to be unique or non-empty.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(lowered.trim(), "-");
    let stripped = NON_SLUG_CHARS.replace_all(&hyphenated, "");
    HYPHEN_RUN.replace_all(&stripped, "-").into_owned()
}

/// Category names keep only word characters and spaces before spaces become `-`.
pub fn slugify_category(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = NON_CATEGORY_CHARS.replace_all(&lowered, "");
    SPACE_RUN.replace_all(&stripped, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Hello World!"), "hello-world");
    }

    #[test]
    fn collapses_surrounding_and_inner_whitespace() {
        assert_eq!(slugify("  multiple   spaces  "), "multiple-spaces");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn collapses_hyphen_runs() {
        assert_eq!(slugify("rust -- the  - good parts"), "rust-the-good-parts");
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(slugify("snake_case 2024"), "snake_case-2024");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(slugify("Café Crème"), "caf-crme");
    }

    #[test]
    fn punctuation_only_yields_empty() {
        assert_eq!(slugify("!!! ???"), "-");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "Hello World!",
            "  multiple   spaces  ",
            " - leading hyphen",
            "Ünïcödé & symbols -- mixed__Up",
            "",
            "already-a-slug",
        ];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn category_slug_replaces_spaces_after_stripping() {
        assert_eq!(slugify_category("Web Development"), "web-development");
        assert_eq!(slugify_category("C++ & Rust"), "c-rust");
        assert_eq!(slugify_category("DevOps"), "devops");
    }
}
