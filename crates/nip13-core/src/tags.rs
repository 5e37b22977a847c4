//! Event tags and prefix lookup.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// First field of the NIP-13 proof-of-work tag.
pub const NONCE_TAG: &str = "nonce";

/// A single tag: an ordered list of strings, e.g. `["nonce", "1C", "20"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Build a tag from string fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tag(fields.into_iter().map(Into::into).collect())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Whether this tag matches `prefix`.
    ///
    /// All prefix elements but the last must be equal to the tag's fields.
    /// The last one only needs to be a string prefix of its field, so `""`
    /// matches any value there.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        let Some((last, init)) = prefix.split_last() else {
            return true;
        };
        if prefix.len() > self.0.len() {
            return false;
        }
        init.iter().zip(self.0.iter()).all(|(p, field)| field == p)
            && self.0[init.len()].starts_with(*last)
    }
}

impl Index<usize> for Tag {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.0[index]
    }
}

impl IndexMut<usize> for Tag {
    fn index_mut(&mut self, index: usize) -> &mut String {
        &mut self.0[index]
    }
}

/// The ordered tag list of an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<Tag>);

impl Tags {
    pub fn new() -> Self {
        Tags(Vec::new())
    }

    /// First tag matching `prefix`, see [`Tag::starts_with`].
    pub fn get_first(&self, prefix: &[&str]) -> Option<&Tag> {
        self.0.iter().find(|tag| tag.starts_with(prefix))
    }

    /// Mutable access to the first tag matching `prefix`.
    pub fn get_first_mut(&mut self, prefix: &[&str]) -> Option<&mut Tag> {
        self.0.iter_mut().find(|tag| tag.starts_with(prefix))
    }

    /// Append a tag, returning its index.
    pub fn push(&mut self, tag: Tag) -> usize {
        self.0.push(tag);
        self.0.len() - 1
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Tag> {
        self.0.iter()
    }
}

impl Index<usize> for Tags {
    type Output = Tag;

    fn index(&self, index: usize) -> &Tag {
        &self.0[index]
    }
}

impl IndexMut<usize> for Tags {
    fn index_mut(&mut self, index: usize) -> &mut Tag {
        &mut self.0[index]
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(tags: Vec<Tag>) -> Self {
        Tags(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Tags {
        Tags(vec![
            Tag::new(["e", "5c83da77af1dec6d7289834998ad7aafbd9e2191396d75ec3cc27f5a77226f36"]),
            Tag::new(["p", "f7234bd4c1394dda46d09f35bd384dd30cc552ad5541990f98844fb06676e9ca"]),
            Tag::new(["nonce", "776797", "20"]),
            Tag::new(["nonce", "1", "8"]),
        ])
    }

    #[test]
    fn test_starts_with() {
        let tag = Tag::new(["nonce", "776797", "20"]);
        assert!(tag.starts_with(&["nonce"]));
        assert!(tag.starts_with(&["nonce", ""]));
        assert!(tag.starts_with(&["nonce", "776"]));
        assert!(tag.starts_with(&["nonce", "776797", "20"]));
        assert!(!tag.starts_with(&["nonc", ""]));
        assert!(!tag.starts_with(&["nonce", "8"]));
        assert!(!tag.starts_with(&["nonce", "776797", "20", ""]));
        assert!(tag.starts_with(&[]));
    }

    #[test]
    fn test_get_first() {
        let tags = sample();
        let nonce = tags.get_first(&["nonce", ""]).unwrap();
        assert_eq!(nonce.get(1), Some("776797"));
        assert_eq!(nonce.get(2), Some("20"));
        assert!(tags.get_first(&["t", ""]).is_none());
    }

    #[test]
    fn test_get_first_mut_and_push() {
        let mut tags = sample();
        tags.get_first_mut(&["nonce", ""]).unwrap()[1] = "42".into();
        assert_eq!(tags[2][1], "42");

        let idx = tags.push(Tag::new(["t", "pow"]));
        assert_eq!(idx, 4);
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_serde_shape() {
        let tags = Tags(vec![Tag::new(["nonce", "1", "8"])]);
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"[["nonce","1","8"]]"#);
        let back: Tags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
    }
}
