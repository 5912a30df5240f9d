use crate::ids_match;

use serde::{Deserialize, Serialize};

/// A registered person together with their enrollment samples.
///
/// `images` holds encoded-image strings (data URLs) in capture order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            images: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Case-insensitive id comparison used by lookups.
    pub fn has_id(&self, id: &str) -> bool {
        ids_match(&self.id, id)
    }

    /// Name to record in attendance snapshots; empty names fall back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
