use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("Mark Twain"), "mark-twain");
        assert_eq!(generator.slugify("  Ada   Lovelace! "), "ada-lovelace");
    }

    #[test]
    fn collapses_symbol_runs_to_one_hyphen() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("rock & roll"), "rock-roll");
    }

    #[test]
    fn yields_empty_for_symbol_only_input() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("!!!"), "");
    }
}
