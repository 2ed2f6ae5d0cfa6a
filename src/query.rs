//! Pure selection and lookup functions over validated entries
//!
//! Everything here is deterministic and total: empty input or no matches
//! yields an empty result, never an error.

use std::fmt;

use serde::Serialize;

use crate::content::{Category, Difficulty, VocabularyEntry};

/// Display token for a difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// No difficulty recorded
    Neutral,
    Positive,
    Caution,
    Alert,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Neutral, Tone::Positive, Tone::Caution, Tone::Alert];

    pub fn name(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Positive => "positive",
            Tone::Caution => "caution",
            Tone::Alert => "alert",
        }
    }

    /// CSS class the themes style this tone with
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "tone-neutral",
            Tone::Positive => "tone-positive",
            Tone::Caution => "tone-caution",
            Tone::Alert => "tone-alert",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entries whose category equals `category`, in input order.
///
/// Entries without a category never match.
pub fn categorize_words(entries: &[VocabularyEntry], category: Category) -> Vec<&VocabularyEntry> {
    entries
        .iter()
        .filter(|e| e.category == Some(category))
        .collect()
}

/// Entries whose difficulty equals `difficulty`, in input order
pub fn filter_by_difficulty(
    entries: &[VocabularyEntry],
    difficulty: Difficulty,
) -> Vec<&VocabularyEntry> {
    entries
        .iter()
        .filter(|e| e.difficulty == Some(difficulty))
        .collect()
}

/// Map a difficulty to its display token
pub fn difficulty_color(difficulty: Option<Difficulty>) -> Tone {
    match difficulty {
        None => Tone::Neutral,
        Some(Difficulty::Beginner) => Tone::Positive,
        Some(Difficulty::Intermediate) => Tone::Caution,
        Some(Difficulty::Advanced) => Tone::Alert,
    }
}

/// Number of entries in each category, in `Category::ALL` order
pub fn count_by_category(entries: &[VocabularyEntry]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&c| (c, entries.iter().filter(|e| e.category == Some(c)).count()))
        .collect()
}

/// Number of entries without a category
pub fn count_uncategorized(entries: &[VocabularyEntry]) -> usize {
    entries.iter().filter(|e| e.category.is_none()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        word: &str,
        category: Option<Category>,
        difficulty: Option<Difficulty>,
    ) -> VocabularyEntry {
        VocabularyEntry {
            slug: word.to_string(),
            word: word.to_string(),
            translation: format!("{}-t", word),
            category,
            difficulty,
            body: String::new(),
        }
    }

    fn sample() -> Vec<VocabularyEntry> {
        vec![
            entry("run", Some(Category::Verbs), Some(Difficulty::Beginner)),
            entry("big", Some(Category::Adjectives), None),
            entry("house", Some(Category::Nouns), Some(Difficulty::Beginner)),
            entry("walk", Some(Category::Verbs), Some(Difficulty::Advanced)),
            entry("hello", None, None),
        ]
    }

    #[test]
    fn test_categorize_words_includes_matching_entry() {
        let entries = vec![entry("run", Some(Category::Verbs), Some(Difficulty::Beginner))];
        let verbs = categorize_words(&entries, Category::Verbs);
        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].translation, "run-t");
        assert_eq!(difficulty_color(entries[0].difficulty), Tone::Positive);
    }

    #[test]
    fn test_categorize_words_excludes_other_categories() {
        let entries = sample();
        for target in Category::ALL {
            let matched = categorize_words(&entries, target);
            for e in &entries {
                let included = matched.iter().any(|m| m.slug == e.slug);
                assert_eq!(included, e.category == Some(target));
            }
        }
    }

    #[test]
    fn test_categorize_words_preserves_order() {
        let entries = sample();
        let verbs: Vec<_> = categorize_words(&entries, Category::Verbs)
            .iter()
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(verbs, vec!["run", "walk"]);

        for target in Category::ALL {
            assert!(categorize_words(&entries, target).len() <= entries.len());
        }
    }

    #[test]
    fn test_categorize_words_empty_input() {
        assert!(categorize_words(&[], Category::Adverbs).is_empty());
        assert!(categorize_words(&sample(), Category::Adverbs).is_empty());
    }

    #[test]
    fn test_difficulty_color_is_total() {
        assert_eq!(difficulty_color(None), Tone::Neutral);
        assert_eq!(difficulty_color(Some(Difficulty::Beginner)), Tone::Positive);
        assert_eq!(difficulty_color(Some(Difficulty::Intermediate)), Tone::Caution);
        assert_eq!(difficulty_color(Some(Difficulty::Advanced)), Tone::Alert);

        let domain = [None]
            .into_iter()
            .chain(Difficulty::ALL.into_iter().map(Some));
        for d in domain {
            assert!(Tone::ALL.contains(&difficulty_color(d)));
        }
    }

    #[test]
    fn test_filter_by_difficulty() {
        let entries = sample();
        let beginner: Vec<_> = filter_by_difficulty(&entries, Difficulty::Beginner)
            .iter()
            .map(|e| e.word.as_str())
            .collect();
        assert_eq!(beginner, vec!["run", "house"]);
    }

    #[test]
    fn test_counts() {
        let entries = sample();
        assert_eq!(
            count_by_category(&entries),
            vec![
                (Category::Verbs, 2),
                (Category::Adjectives, 1),
                (Category::Nouns, 1),
                (Category::Adverbs, 0),
            ]
        );
        assert_eq!(count_uncategorized(&entries), 1);
    }
}
