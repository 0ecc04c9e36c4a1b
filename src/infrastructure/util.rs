// src/infrastructure/util.rs
use crate::{application::ports::util::SlugGenerator, domain::slug};

/// Slug generator backed by the regex rules in `domain::slug`.
#[derive(Default, Clone)]
pub struct RegexSlugGenerator;

impl SlugGenerator for RegexSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
