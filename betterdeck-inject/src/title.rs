//! Window-title unread indicators.

/// Computes title transitions for unread-state changes.
///
/// Pure string logic: the embedding adapter owns reading and writing the
/// actual document title and reports whether any unread markers remain
/// visible.
#[derive(Debug, Clone)]
pub struct TitleState {
    default_title: String,
}

impl TitleState {
    #[must_use]
    pub fn new(default_title: impl Into<String>) -> Self {
        Self {
            default_title: default_title.into(),
        }
    }

    fn unread_title(&self) -> String {
        format!("[*] {}", self.default_title)
    }

    fn count_title(&self, count: u32) -> String {
        format!("[{}] {}", count, self.default_title)
    }

    /// The title to switch to after an unread-state change, or `None` when
    /// the current title already fits.
    ///
    /// `read`/`count` come from the host's read-state event;
    /// `any_unread_visible` reports whether any unread markers remain in
    /// the document.
    #[must_use]
    pub fn next_title(
        &self,
        current: &str,
        read: Option<bool>,
        count: Option<u32>,
        any_unread_visible: bool,
    ) -> Option<String> {
        let mut title = current.to_string();

        if count.unwrap_or(0) > 0 && title == self.default_title {
            title = self.count_title(count.unwrap_or(0));
        }
        if read == Some(false) && title == self.default_title {
            title = self.unread_title();
        }
        if title != self.default_title && !any_unread_visible {
            title = self.default_title.clone();
        }

        (title != current).then_some(title)
    }
}
