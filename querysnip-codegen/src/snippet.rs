//! Labeled, language-tagged blocks of generated example text.

use serde::{Deserialize, Serialize};

/// A labeled block of generated code shown to the user.
///
/// The language tag drives syntax highlighting in the display panel.
/// Exactly one snippet in a generated list is open by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Display label, e.g. `Dependencies`.
    pub label: String,
    /// Language tag for syntax highlighting, e.g. `kotlin`.
    pub language: String,
    /// Generated code text.
    pub content: String,
    /// Whether the snippet starts expanded in the display panel.
    #[serde(default)]
    pub open_by_default: bool,
}

impl Snippet {
    /// Creates a snippet that starts collapsed.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            language: language.into(),
            content: content.into(),
            open_by_default: false,
        }
    }

    /// Marks the snippet as open by default.
    #[must_use]
    pub fn default_open(mut self) -> Self {
        self.open_by_default = true;
        self
    }
}
