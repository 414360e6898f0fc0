//! Detail dialog state: at most one record shown at a time.

/// Holds the key of the open record, never the record itself, so the
/// dialog always re-reads current content when it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailDialog<K> {
    current: Option<K>,
}

impl<K> Default for DetailDialog<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq> DetailDialog<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `key`, replacing any record already open.
    pub fn open(&mut self, key: K) {
        self.current = Some(key);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_showing(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_b_replaces_a() {
        let mut dialog = DetailDialog::new();
        dialog.open("a");
        dialog.open("b");
        assert_eq!(dialog.current(), Some(&"b"));
        assert!(!dialog.is_showing(&"a"));
        assert!(dialog.is_showing(&"b"));
    }

    #[test]
    fn close_after_any_opens_is_closed() {
        let mut dialog = DetailDialog::new();
        for key in ["a", "b", "a", "c"] {
            dialog.open(key);
        }
        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.current(), None);
    }

    #[test]
    fn starts_closed() {
        let dialog: DetailDialog<String> = DetailDialog::default();
        assert!(!dialog.is_open());
    }
}
