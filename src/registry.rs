//! Category registry: id -> category, with the videos in display order.

use crate::content::builtin_categories;
use crate::errors::{PortfolioError, Result};
use crate::model::{Category, VideoEntry};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

static BUILTIN: Lazy<CategoryRegistry> = Lazy::new(|| {
    CategoryRegistry::new(builtin_categories()).unwrap_or_else(|e| {
        log::error!("built-in content rejected: {}", e);
        CategoryRegistry::default()
    })
});

/// Read-only table of categories.
///
/// Categories keep the order they were inserted in; that order is the gallery
/// index order and the video order is the numbering shown on each card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

/// A video hit from [`CategoryRegistry::search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMatch<'a> {
    pub category: &'a Category,
    pub video_index: usize,
    pub video: &'a VideoEntry,
    pub score: i64,
}

impl CategoryRegistry {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut index = HashMap::with_capacity(categories.len());
        for (pos, category) in categories.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(PortfolioError::InvalidContent(format!(
                    "category #{} has an empty id",
                    pos + 1
                )));
            }
            if let Some(video) = category.videos.iter().find(|v| v.title.trim().is_empty()) {
                return Err(PortfolioError::InvalidContent(format!(
                    "video with link {} in '{}' has an empty title",
                    video.link, category.id
                )));
            }
            if index.insert(category.id.clone(), pos).is_some() {
                return Err(PortfolioError::DuplicateCategory(category.id.clone()));
            }
        }
        log::debug!("registry built with {} categories", categories.len());
        Ok(Self { categories, index })
    }

    /// The registry compiled into the binary, built on first use
    pub fn builtin() -> &'static CategoryRegistry {
        &BUILTIN
    }

    /// Parse a JSON array of categories
    pub fn from_json_str(json: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_json_str(&content)?;
        log::info!(
            "loaded {} categories from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn lookup(&self, id: &str) -> Option<&Category> {
        self.index.get(id).map(|&pos| &self.categories[pos])
    }

    /// Like [`lookup`](Self::lookup), but a miss is an error
    pub fn require(&self, id: &str) -> Result<&Category> {
        self.lookup(id)
            .ok_or_else(|| PortfolioError::CategoryNotFound(id.to_string()))
    }

    /// 0-based video access within a category
    pub fn video(&self, id: &str, index: usize) -> Option<&VideoEntry> {
        self.lookup(id).and_then(|c| c.videos.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.id.as_str())
    }

    pub fn get_index(&self, pos: usize) -> Option<&Category> {
        self.categories.get(pos)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_videos(&self) -> usize {
        self.categories.iter().map(|c| c.videos.len()).sum()
    }

    /// Fuzzy title search across every category.
    ///
    /// Best score first; equal scores keep registry order.
    pub fn search(&self, query: &str) -> Vec<VideoMatch<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut hits: Vec<VideoMatch<'_>> = self
            .categories
            .iter()
            .flat_map(|category| {
                category
                    .videos
                    .iter()
                    .enumerate()
                    .map(move |(video_index, video)| (category, video_index, video))
            })
            .filter_map(|(category, video_index, video)| {
                matcher
                    .fuzzy_match(&video.title, query)
                    .map(|score| VideoMatch {
                        category,
                        video_index,
                        video,
                        score,
                    })
            })
            .collect();

        // stable sort keeps registry order for ties
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, titles: &[&str]) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            videos: titles
                .iter()
                .map(|t| VideoEntry::new(t, "/x.png", "https://example.com"))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_builtin_lookup_preserves_video_order() {
        let registry = CategoryRegistry::builtin();
        let tutorial = registry.lookup("tutorial-products").unwrap();
        let titles: Vec<&str> = tutorial.videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Knitting",
                "DIY Clutch",
                "Short about the tutorial",
                "Company advertisement",
                "Stop motion product advertisement",
            ]
        );
    }

    #[test]
    fn test_builtin_registry_order() {
        let ids: Vec<&str> = CategoryRegistry::builtin().ids().collect();
        assert_eq!(
            ids,
            vec![
                "fun-vlog",
                "motivation-business",
                "fashion",
                "tutorial-products",
                "itr-advertise",
                "stop-motion",
                "bts",
            ]
        );
    }

    #[test]
    fn test_unknown_id_is_none() {
        let registry = CategoryRegistry::builtin();
        assert!(registry.lookup("weddings").is_none());
        assert!(registry.lookup("").is_none());
        assert!(registry.lookup("FASHION").is_none());
    }

    #[test]
    fn test_require_maps_miss_to_error() {
        let err = CategoryRegistry::builtin().require("nope").unwrap_err();
        assert!(matches!(err, PortfolioError::CategoryNotFound(id) if id == "nope"));
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let registry = CategoryRegistry::builtin();
        let a = registry.lookup("fashion").unwrap();
        let b = registry.lookup("fashion").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_category_is_valid() {
        let registry = CategoryRegistry::new(vec![category("empty", &[])]).unwrap();
        assert_eq!(registry.lookup("empty").unwrap().video_count(), 0);
        assert!(registry.video("empty", 0).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = CategoryRegistry::new(vec![category("a", &["one"]), category("a", &["two"])])
            .unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateCategory(id) if id == "a"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = CategoryRegistry::new(vec![category("a", &["  "])]).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidContent(_)));
    }

    #[test]
    fn test_search_ranks_matches() {
        let registry = CategoryRegistry::builtin();
        let hits = registry.search("dress");
        assert!(hits.len() >= 2);
        let mut top: Vec<&str> = hits[..2].iter().map(|h| h.video.title.as_str()).collect();
        top.sort();
        assert_eq!(top, vec!["Pink dress", "White dress"]);
        assert!(hits[..2].iter().all(|h| h.category.id == "fashion"));

        assert!(registry.search("   ").is_empty());
    }

    #[test]
    fn test_position_matches_iteration() {
        let registry = CategoryRegistry::builtin();
        for (pos, category) in registry.iter().enumerate() {
            assert_eq!(registry.position(&category.id), Some(pos));
            assert_eq!(registry.get_index(pos), Some(category));
        }
    }
}
