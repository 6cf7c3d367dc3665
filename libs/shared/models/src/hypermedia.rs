//! HAL-style envelopes for resource representations.
//!
//! A single resource is rendered as its own fields plus a `_links` object.
//! A collection nests its members under `_embedded.<relation>` and carries
//! its own `_links`. Empty collections omit `_embedded` entirely.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SELF_REL: &str = "self";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Named navigation references keyed by relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.0.insert(rel.into(), Link { href: href.into() });
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }

    pub fn self_link(&self) -> Option<&Link> {
        self.get(SELF_REL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub embedded: BTreeMap<String, Vec<EntityModel<T>>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> CollectionModel<T> {
    pub fn new(relation: &str, items: Vec<EntityModel<T>>, links: Links) -> Self {
        let mut embedded = BTreeMap::new();
        if !items.is_empty() {
            embedded.insert(relation.to_string(), items);
        }
        Self { embedded, links }
    }

    /// Members under `relation`, empty when the collection had none.
    pub fn items(&self, relation: &str) -> &[EntityModel<T>] {
        self.embedded.get(relation).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Turns resource paths into absolute hrefs under the public base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `self` pointing at one record and `collection_rel` pointing at its list.
    pub fn item_links(&self, item_path: &str, collection_rel: &str, collection_path: &str) -> Links {
        Links::new()
            .with(SELF_REL, self.href(item_path))
            .with(collection_rel, self.href(collection_path))
    }

    pub fn collection_links(&self, collection_path: &str) -> Links {
        Links::new().with(SELF_REL, self.href(collection_path))
    }
}
