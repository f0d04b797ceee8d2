//! User domain model.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// A signed-in user as supplied by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl User {
    /// The history partition key for this user.
    pub fn identity(&self) -> Option<Identity> {
        Identity::new(self.uid.clone())
    }
}
