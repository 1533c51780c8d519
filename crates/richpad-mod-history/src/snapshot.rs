/// Immutable content snapshots stored in the history.
use std::fmt;
use std::sync::Arc;

/// Serialized editor content (HTML) captured at one instant.
///
/// Cloning is cheap: the text is shared, and never mutated once captured.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot(Arc<str>);

impl Snapshot {
    /// Captures `content` as a snapshot.
    pub fn new(content: impl Into<Arc<str>>) -> Self {
        Self(content.into())
    }

    /// Returns the captured content.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the captured content in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the captured content is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Snapshot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Snapshot {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Snapshot {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for Snapshot {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Snapshot {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let snap = Snapshot::default();
        assert!(snap.is_empty());
        assert_eq!(snap.len(), 0);
    }

    #[test]
    fn test_compares_with_str() {
        let snap = Snapshot::from("<b>hi</b>");
        assert_eq!(snap, "<b>hi</b>");
        assert_eq!(snap.as_str(), "<b>hi</b>");
        assert_eq!(snap.to_string(), "<b>hi</b>");
    }

    #[test]
    fn test_clone_shares_content() {
        let snap = Snapshot::from(String::from("shared"));
        let copy = snap.clone();
        assert_eq!(snap, copy);
        assert!(std::ptr::eq(snap.as_str(), copy.as_str()));
    }
}
