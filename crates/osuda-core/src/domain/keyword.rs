use std::collections::HashSet;

use super::Post;

/// Collect the unique keyword tokens across a set of posts.
///
/// Tokens are the comma-separated pieces of each post's raw `keywords`
/// field, trimmed, with empty pieces skipped. Order is discovery order over
/// the collection; duplicates keep their first appearance. Recomputed on
/// every call, never cached.
pub fn unique_keywords(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for post in posts {
        for token in post.keywords.split(',') {
            let token = token.trim();
            if !token.is_empty() && seen.insert(token.to_string()) {
                keywords.push(token.to_string());
            }
        }
    }

    keywords
}
