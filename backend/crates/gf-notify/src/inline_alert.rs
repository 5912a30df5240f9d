use gf_core::InlineKind;

use tokio::time::Instant;

/// An alert placed at the top of a page container
#[derive(Debug, Clone, PartialEq)]
pub struct InlineAlert {
    pub kind: InlineKind,
    pub text: String,
    pub(crate) expires_at: Instant,
}

impl InlineAlert {
    pub(crate) fn new(kind: InlineKind, text: String, expires_at: Instant) -> Self {
        Self {
            kind,
            text,
            expires_at,
        }
    }

    /// e.g. `inline-alert inline-success`
    pub fn class_list(&self) -> String {
        self.kind.class_list()
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
