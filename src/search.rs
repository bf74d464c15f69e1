//! Search filter for posts
//!
//! Three closed match strategies over a post:
//! - `title`: case-insensitive substring of the title
//! - `full`: case-insensitive substring of the title, body, or author name
//! - `fuzzy`: case-insensitive in-order subsequence of the title
//!
//! An empty query matches every post regardless of mode.

use std::fmt;
use std::str::FromStr;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use postdeck_model::Post;
use serde::{Deserialize, Serialize};

use crate::store::UserIndex;

/// Valid search mode names
pub const VALID_SEARCH_MODES: &[&str] = &["title", "full", "fuzzy"];

/// Strategy used to match the query against a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Title,
    Full,
    Fuzzy,
}

impl SearchMode {
    /// All modes in selector order
    pub const ALL: [SearchMode; 3] = [SearchMode::Title, SearchMode::Full, SearchMode::Fuzzy];

    /// Next mode in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            SearchMode::Title => SearchMode::Full,
            SearchMode::Full => SearchMode::Fuzzy,
            SearchMode::Fuzzy => SearchMode::Title,
        }
    }

    /// Short label for the mode selector
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Title => "Title",
            SearchMode::Full => "Full text",
            SearchMode::Fuzzy => "Fuzzy",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Title => write!(f, "title"),
            SearchMode::Full => write!(f, "full"),
            SearchMode::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchMode::Title),
            "full" => Ok(SearchMode::Full),
            "fuzzy" => Ok(SearchMode::Fuzzy),
            _ => Err(format!(
                "invalid search mode '{}', expected one of: {}",
                s,
                VALID_SEARCH_MODES.join(", ")
            )),
        }
    }
}

/// Decide whether `post` matches `query` under `mode`.
///
/// `users` resolves the author name for [`SearchMode::Full`]; a post whose
/// author is missing from the index searches against an empty author name.
pub fn matches(post: &Post, query: &str, mode: SearchMode, users: &UserIndex) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    match mode {
        SearchMode::Title => contains_ignore_case(&post.title, &needle),
        SearchMode::Full => {
            let author = users.name_of(post.user_id).unwrap_or("");
            contains_ignore_case(&post.title, &needle)
                || contains_ignore_case(&post.body, &needle)
                || contains_ignore_case(author, &needle)
        }
        SearchMode::Fuzzy => is_subsequence(&post.title.to_lowercase(), &needle),
    }
}

/// `needle` must already be lowercased
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True iff every char of `needle` appears in `haystack` in order
fn is_subsequence(haystack: &str, needle: &str) -> bool {
    let mut remaining = haystack.chars();
    needle
        .chars()
        .all(|wanted| remaining.by_ref().any(|c| c == wanted))
}

/// Character indices in `title` to highlight for `query` under `mode`.
///
/// Only fuzzy mode highlights; the indices come from the skim matcher so they
/// follow the best-scoring alignment rather than the first greedy one.
pub fn title_highlights(title: &str, query: &str, mode: SearchMode) -> Vec<usize> {
    if query.is_empty() || mode != SearchMode::Fuzzy {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    matcher
        .fuzzy_indices(title, query)
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use postdeck_model::User;

    fn make_post(id: u64, user_id: u64, title: &str, body: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn users() -> UserIndex {
        UserIndex::new(&[
            User {
                id: 1,
                name: "Leanne Graham".to_string(),
                username: "Bret".to_string(),
                email: String::new(),
            },
            User {
                id: 2,
                name: "Ervin Howell".to_string(),
                username: "Antonette".to_string(),
                email: String::new(),
            },
        ])
    }

    #[test]
    fn test_empty_query_matches_every_mode() {
        let post = make_post(1, 1, "anything", "at all");
        for mode in SearchMode::ALL {
            assert!(matches(&post, "", mode, &users()));
        }
    }

    #[test]
    fn test_title_mode_is_case_insensitive_substring() {
        let post = make_post(1, 1, "Sunt Aut Facere", "quia et suscipit");
        assert!(matches(&post, "aut fac", SearchMode::Title, &users()));
        assert!(matches(&post, "SUNT", SearchMode::Title, &users()));
        assert!(!matches(&post, "suscipit", SearchMode::Title, &users()));
    }

    #[test]
    fn test_full_mode_searches_body_and_author() {
        let post = make_post(1, 2, "qui est esse", "est rerum tempore vitae");
        assert!(matches(&post, "rerum", SearchMode::Full, &users()));
        assert!(matches(&post, "ervin", SearchMode::Full, &users()));
        assert!(matches(&post, "QUI", SearchMode::Full, &users()));
        assert!(!matches(&post, "leanne", SearchMode::Full, &users()));
    }

    #[test]
    fn test_full_mode_missing_author_is_empty() {
        let post = make_post(1, 99, "title", "body");
        assert!(!matches(&post, "graham", SearchMode::Full, &users()));
        assert!(matches(&post, "body", SearchMode::Full, &users()));
    }

    #[test]
    fn test_full_is_superset_of_title() {
        let posts = [
            make_post(1, 1, "Hello World", "first"),
            make_post(2, 2, "delectus aut autem", "second body"),
            make_post(3, 3, "", ""),
        ];
        let queries = ["", "hello", "AUT", "o w", "second", "zzz", "d"];
        for post in &posts {
            for query in queries {
                if matches(post, query, SearchMode::Title, &users()) {
                    assert!(
                        matches(post, query, SearchMode::Full, &users()),
                        "title match for {query:?} on {:?} must imply full match",
                        post.title
                    );
                }
            }
        }
    }

    #[test]
    fn test_fuzzy_subsequence() {
        let post = make_post(1, 1, "Hello World", "");
        assert!(matches(&post, "hwd", SearchMode::Fuzzy, &users()));
        assert!(matches(&post, "HWD", SearchMode::Fuzzy, &users()));
        assert!(!matches(&post, "wd h", SearchMode::Fuzzy, &users()));
        assert!(!matches(&post, "dw", SearchMode::Fuzzy, &users()));
    }

    #[test]
    fn test_fuzzy_ignores_contiguity() {
        let post = make_post(1, 1, "post title", "");
        assert!(matches(&post, "ptt", SearchMode::Fuzzy, &users()));
    }

    #[test]
    fn test_fuzzy_respects_repeated_chars() {
        let post = make_post(1, 1, "abc", "");
        assert!(!matches(&post, "aa", SearchMode::Fuzzy, &users()));
        let post = make_post(2, 1, "banana", "");
        assert!(matches(&post, "aaa", SearchMode::Fuzzy, &users()));
    }

    #[test]
    fn test_fuzzy_only_looks_at_title() {
        let post = make_post(1, 1, "abc", "xyz");
        assert!(!matches(&post, "xyz", SearchMode::Fuzzy, &users()));
    }

    #[test]
    fn test_search_mode_parse_and_display() {
        assert_eq!("Title".parse::<SearchMode>().unwrap(), SearchMode::Title);
        assert_eq!(" full ".parse::<SearchMode>().unwrap(), SearchMode::Full);
        assert_eq!("FUZZY".parse::<SearchMode>().unwrap(), SearchMode::Fuzzy);
        assert!("regex".parse::<SearchMode>().is_err());
        for mode in SearchMode::ALL {
            assert_eq!(mode.to_string().parse::<SearchMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_search_mode_cycles() {
        assert_eq!(SearchMode::Title.next(), SearchMode::Full);
        assert_eq!(SearchMode::Full.next(), SearchMode::Fuzzy);
        assert_eq!(SearchMode::Fuzzy.next(), SearchMode::Title);
    }

    #[test]
    fn test_title_highlights_only_in_fuzzy_mode() {
        assert!(title_highlights("Hello World", "hw", SearchMode::Title).is_empty());
        assert!(title_highlights("Hello World", "", SearchMode::Fuzzy).is_empty());

        let indices = title_highlights("Hello World", "hw", SearchMode::Fuzzy);
        assert_eq!(indices, vec![0, 6]);
    }
}
