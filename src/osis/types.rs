use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Verse number → verse text.
pub type Chapter = BTreeMap<String, String>;

/// Chapter number → chapter.
pub type Book = BTreeMap<String, Chapter>;

/// A dotted OSIS verse reference such as `Gen.1.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseId {
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

impl VerseId {
    /// Splits `Book.Chapter.Verse`. Returns `None` unless the identifier has
    /// exactly three dot-separated segments; empty segments are kept.
    pub fn parse(osis_id: &str) -> Option<Self> {
        let mut parts = osis_id.split('.');
        let book = parts.next()?;
        let chapter = parts.next()?;
        let verse = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            book: book.to_string(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        })
    }
}

impl std::fmt::Display for VerseId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.book, self.chapter, self.verse)
    }
}

/// Book display name → chapter → verse → text.
///
/// Keys are ordered so serializing the same document twice yields identical
/// bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BibleDocument {
    books: BTreeMap<String, Book>,
}

impl BibleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` at `[book][chapter][verse]`, creating the book and
    /// chapter on demand. An existing entry is replaced.
    pub fn insert_verse(
        &mut self,
        book: &str,
        chapter: &str,
        verse: &str,
        text: impl Into<String>,
    ) -> Option<String> {
        self.chapter_mut(book, chapter)
            .insert(verse.to_string(), text.into())
    }

    /// Gets or creates the chapter map for `book`/`chapter`.
    pub fn chapter_mut(
        &mut self,
        book: &str,
        chapter: &str,
    ) -> &mut Chapter {
        self.books
            .entry(book.to_string())
            .or_default()
            .entry(chapter.to_string())
            .or_default()
    }

    pub fn verse(
        &self,
        book: &str,
        chapter: &str,
        verse: &str,
    ) -> Option<&str> {
        self.books
            .get(book)?
            .get(chapter)?
            .get(verse)
            .map(String::as_str)
    }

    pub fn book(
        &self,
        name: &str,
    ) -> Option<&Book> {
        self.books.get(name)
    }

    pub fn book_names(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .values()
            .flat_map(|book| book.values())
            .map(|chapter| chapter.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
