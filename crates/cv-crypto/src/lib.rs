//! Certificate digests for credhub-venafi.
//!
//! Converts the PEM text held by the credential store into the SHA-1
//! thumbprint the issuing authority reports, so both inventories can be
//! compared by content rather than by name.
//!
//! Digests come from the `sha1` crate and decoding from `base64`.

pub mod thumbprint;

pub use thumbprint::{decode_pem, thumbprint, thumbprint_der, ThumbprintError};
