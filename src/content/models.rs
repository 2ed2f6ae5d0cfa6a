//! Data models for vocabulary content

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Word class an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Verbs,
    Adjectives,
    Nouns,
    Adverbs,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Verbs,
        Category::Adjectives,
        Category::Nouns,
        Category::Adverbs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Verbs => "verbs",
            Category::Adjectives => "adjectives",
            Category::Nouns => "nouns",
            Category::Adverbs => "adverbs",
        }
    }

    /// Heading used on rendered pages
    pub fn label(&self) -> &'static str {
        match self {
            Category::Verbs => "Verbs",
            Category::Adjectives => "Adjectives",
            Category::Nouns => "Nouns",
            Category::Adverbs => "Adverbs",
        }
    }

    pub fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// How hard a word is for a learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.as_str()).collect()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown difficulty '{}'", s))
    }
}

/// Frontmatter fields as they are written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFrontmatter {
    pub word: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// A validated vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    /// File stem the entry was loaded from
    pub slug: String,
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Markdown body, trimmed
    pub body: String,
}

impl VocabularyEntry {
    pub fn frontmatter(&self) -> EntryFrontmatter {
        EntryFrontmatter {
            word: self.word.clone(),
            translation: self.translation.clone(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// A content file that has been split but not yet validated
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub path: PathBuf,
    pub fields: serde_yaml::Mapping,
    pub body: String,
}
