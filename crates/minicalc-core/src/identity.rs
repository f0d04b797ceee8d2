//! Storage-partition identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque per-user key used only to partition stored history.
///
/// The core never generates identities and makes no assumption about their
/// uniqueness or authenticity; session integrity is the identity provider's
/// responsibility.
///
/// Deserialization goes through [`Identity::new`], so a blank uid is
/// rejected there as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Identity(String);

impl Identity {
    /// Wraps a uid. Returns `None` for an empty or whitespace-only uid, which
    /// callers treat the same as "no identity".
    pub fn new(uid: impl Into<String>) -> Option<Self> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            None
        } else {
            Some(Self(uid))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = &'static str;

    fn try_from(uid: String) -> Result<Self, Self::Error> {
        Identity::new(uid).ok_or("identity must not be blank")
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_uid_is_absent() {
        assert!(Identity::new("").is_none());
        assert!(Identity::new("   ").is_none());
        assert_eq!(Identity::new("google|1").unwrap().as_str(), "google|1");
    }

    #[test]
    fn test_deserialize_rejects_blank_uid() {
        assert!(serde_json::from_str::<Identity>("\"\"").is_err());
        assert!(serde_json::from_str::<Identity>("\"   \"").is_err());

        let identity: Identity = serde_json::from_str("\"google|1\"").unwrap();
        assert_eq!(identity.as_str(), "google|1");
        assert_eq!(serde_json::to_string(&identity).unwrap(), "\"google|1\"");
    }
}
