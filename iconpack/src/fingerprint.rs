//! Content fingerprint of an icon set.
//!
//! The fingerprint covers each collection's prefix and the sorted set of its
//! icon names. Icon bodies, aliases and the insertion order of the icon table
//! do not contribute, so two loads of the same icon set hash identically even
//! when a source enumerates icons in a different order.
//!
//! The order of collections is significant: callers supply them in a stable
//! order (the insertion order of a [`CollectionMap`](crate::CollectionMap)).

use std::fmt;

use sha2::{Digest, Sha256};

use crate::collection::IconCollection;

/// Separator between sorted icon names fed to the digest.
const NAME_SEPARATOR: &str = ",";

/// Length of a rendered fingerprint (SHA-256 as hex).
pub const FINGERPRINT_LEN: usize = 64;

/// SHA-256 digest of an icon set, rendered as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of a sequence of collections.
    ///
    /// An empty sequence yields the digest of zero updates.
    pub fn compute<'a>(collections: impl IntoIterator<Item = &'a IconCollection>) -> Self {
        let mut hasher = Sha256::new();

        for collection in collections {
            let mut names: Vec<&str> = collection.icon_names().collect();
            names.sort_unstable();

            hasher.update(collection.prefix.as_bytes());
            hasher.update(names.join(NAME_SEPARATOR).as_bytes());
        }

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Parse a rendered fingerprint.
    ///
    /// Returns `None` unless the input is exactly 64 lowercase hex digits.
    pub fn parse(s: &str) -> Option<Self> {
        let valid = s.len() == FINGERPRINT_LEN
            && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        valid.then(|| Self(s.to_string()))
    }

    /// The hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated digest for log output.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
