//! Recursive translation tree.
//!
//! A language's strings form a tree whose leaves are localized text and whose
//! interior nodes group related keys. Lookup keys address leaves by joining the
//! segment names on the path with `.`.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// One node of a language's translation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Interior(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    /// An interior node with no children
    pub fn empty() -> Self {
        TranslationNode::Interior(BTreeMap::new())
    }

    /// Resolve a dotted key to the leaf it names.
    ///
    /// Returns `None` for the empty key, for a path that is absent, for a path
    /// that reaches a leaf before all segments are consumed, and for a path that
    /// ends on an interior node.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }

        let mut current = self;
        for segment in key.split('.') {
            current = match current {
                TranslationNode::Interior(children) => children.get(segment)?,
                TranslationNode::Leaf(_) => return None,
            };
        }

        match current {
            TranslationNode::Leaf(text) => Some(text.as_str()),
            TranslationNode::Interior(_) => None,
        }
    }

    /// Deep-merge `other` into this node.
    ///
    /// Interior nodes merge child by child; any other pairing is replaced by
    /// the incoming node.
    pub fn merge(&mut self, other: TranslationNode) {
        match (self, other) {
            (TranslationNode::Interior(existing), TranslationNode::Interior(incoming)) => {
                for (segment, node) in incoming {
                    match existing.get_mut(&segment) {
                        Some(current) => current.merge(node),
                        None => {
                            existing.insert(segment, node);
                        }
                    }
                }
            }
            (this, other) => *this = other,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TranslationNode::Leaf(_))
    }

    /// Number of leaves under this node
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationNode::Leaf(_) => 1,
            TranslationNode::Interior(children) => children.values().map(TranslationNode::leaf_count).sum(),
        }
    }

    /// Dotted keys of every leaf under this node, sorted
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys(String::new(), &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: String, keys: &mut Vec<String>) {
        match self {
            TranslationNode::Leaf(_) => keys.push(prefix),
            TranslationNode::Interior(children) => {
                for (segment, child) in children {
                    let path = if prefix.is_empty() {
                        segment.clone()
                    } else {
                        format!("{}.{}", prefix, segment)
                    };
                    child.collect_leaf_keys(path, keys);
                }
            }
        }
    }
}

impl Default for TranslationNode {
    fn default() -> Self {
        TranslationNode::empty()
    }
}

impl From<&str> for TranslationNode {
    fn from(text: &str) -> Self {
        TranslationNode::Leaf(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationNode {
        serde_json::from_str(
            r#"{
                "profile": { "basic_info": "Basic Information", "title": "Profile" },
                "home": { "hero": { "title": "Community Care Network" } },
                "greeting": "Hello {{name}}"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_leaf() {
        let root = sample();
        assert_eq!(root.resolve("profile.basic_info"), Some("Basic Information"));
        assert_eq!(root.resolve("home.hero.title"), Some("Community Care Network"));
        assert_eq!(root.resolve("greeting"), Some("Hello {{name}}"));
    }

    #[test]
    fn test_resolve_interior_is_not_found() {
        let root = sample();
        assert_eq!(root.resolve("profile"), None);
        assert_eq!(root.resolve("home.hero"), None);
    }

    #[test]
    fn test_resolve_past_leaf_is_not_found() {
        let root = sample();
        assert_eq!(root.resolve("greeting.extra"), None);
        assert_eq!(root.resolve("profile.title.more"), None);
    }

    #[test]
    fn test_resolve_malformed_keys() {
        let root = sample();
        assert_eq!(root.resolve(""), None);
        assert_eq!(root.resolve("."), None);
        assert_eq!(root.resolve("profile..title"), None);
        assert_eq!(root.resolve("profile.title."), None);
        assert_eq!(root.resolve("missing.key"), None);
    }

    #[test]
    fn test_leaf_root_resolves_nothing() {
        let root = TranslationNode::from("text");
        assert_eq!(root.resolve("text"), None);
    }

    #[test]
    fn test_merge_overrides_and_extends() {
        let mut root = sample();
        let overrides: TranslationNode = serde_json::from_str(
            r#"{ "profile": { "title": "My Profile", "phone": "Phone" }, "greeting": { "formal": "Good day" } }"#,
        )
        .unwrap();

        root.merge(overrides);

        assert_eq!(root.resolve("profile.title"), Some("My Profile"));
        assert_eq!(root.resolve("profile.basic_info"), Some("Basic Information"));
        assert_eq!(root.resolve("profile.phone"), Some("Phone"));
        assert_eq!(root.resolve("greeting"), None);
        assert_eq!(root.resolve("greeting.formal"), Some("Good day"));
    }

    #[test]
    fn test_leaf_keys_and_count() {
        let root = sample();
        assert_eq!(
            root.leaf_keys(),
            vec!["greeting", "home.hero.title", "profile.basic_info", "profile.title"]
        );
        assert_eq!(root.leaf_count(), 4);
        assert_eq!(TranslationNode::empty().leaf_count(), 0);
    }

    #[test]
    fn test_rejects_non_string_values() {
        let parsed = serde_json::from_str::<TranslationNode>(r#"{ "count": 3 }"#);
        assert!(parsed.is_err());
    }
}
