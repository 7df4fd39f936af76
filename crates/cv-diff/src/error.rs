//! Per-entry key derivation errors.
//!
//! These never abort a comparison. Strategies record them and the entry takes
//! part in the diff with a degraded (usually empty) key.

use cv_crypto::ThumbprintError;
use cv_store::StoreError;

/// A failure to derive the comparison key for one entry.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The certificate body could not be fetched from the credential store.
    #[error("fetching certificate {name}: {source}")]
    Fetch {
        name: String,
        #[source]
        source: StoreError,
    },

    /// The fetched body could not be turned into a thumbprint.
    #[error("computing thumbprint of {name}: {source}")]
    Thumbprint {
        name: String,
        #[source]
        source: ThumbprintError,
    },
}

impl KeyError {
    /// Name of the credential whose key could not be derived.
    pub fn name(&self) -> &str {
        match self {
            Self::Fetch { name, .. } | Self::Thumbprint { name, .. } => name,
        }
    }
}
