//! In-memory storybook collection.

use crate::defaults::default_storybooks;
use storyloom_core::Storybook;

/// Catalog filter categories, 全部 first.
pub const CATEGORIES: &[&str] = &["全部", "冒险", "童话", "科学", "动物"];

/// In-memory collection of storybooks, newest first.
///
/// Process-wide lifetime under a single-writer assumption: seeded once,
/// grown monotonically by [`StorybookStore::add`], no deletion path.
///
/// # Examples
///
/// ```
/// use storyloom_pipeline::StorybookStore;
///
/// let store = StorybookStore::with_defaults();
/// assert!(!store.is_empty());
/// assert!(store.get("1").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StorybookStore {
    books: Vec<Storybook>,
}

impl StorybookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the fixed default catalog.
    pub fn with_defaults() -> Self {
        Self {
            books: default_storybooks(),
        }
    }

    /// All storybooks, newest first.
    pub fn list(&self) -> &[Storybook] {
        &self.books
    }

    /// Look up a storybook by id.
    pub fn get(&self, id: &str) -> Option<&Storybook> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Prepend a generated storybook so it shows first.
    pub fn add(&mut self, book: Storybook) {
        self.books.insert(0, book);
    }

    /// Number of storybooks held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the store holds no storybooks.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str) -> Storybook {
        Storybook {
            id: id.to_string(),
            title: "测试故事".to_string(),
            cover: "📚".to_string(),
            category: "冒险".to_string(),
            description: "一个测试故事。".to_string(),
            pages: vec![],
        }
    }

    #[test]
    fn defaults_are_seeded() {
        let store = StorybookStore::with_defaults();
        assert_eq!(store.len(), 5);
        assert_eq!(store.get("1").unwrap().title, "小兔子的森林冒险");
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut store = StorybookStore::with_defaults();
        store.add(book("new"));
        assert_eq!(store.list()[0].id, "new");
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn every_seeded_book_files_under_a_filter_category() {
        let store = StorybookStore::with_defaults();
        for book in store.list() {
            assert!(
                CATEGORIES.contains(&book.category.as_str()),
                "{} is not a filter category",
                book.category
            );
        }
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = StorybookStore::with_defaults();
        assert!(store.get("no-such-id").is_none());
    }
}
