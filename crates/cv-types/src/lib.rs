//! Foundation types for credhub-venafi.
//!
//! This crate holds the records exchanged between the certificate authority
//! (Venafi), the credential store (CredHub) and the reconciliation engine.
//! Every other `cv-*` crate depends on `cv-types`.
//!
//! # Key Types
//!
//! - [`CertificateInfo`] -- A certificate as listed by the issuing authority (left side)
//! - [`CertificateMetadata`] -- A certificate entry as listed by the credential store (right side)
//! - [`Certificate`] -- A stored certificate body fetched by name
//! - [`Thumbprint`] -- SHA-1 digest of a certificate's DER encoding

pub mod certificate;
pub mod thumbprint;

pub use certificate::{Certificate, CertificateInfo, CertificateMetadata, CertificateValue};
pub use thumbprint::Thumbprint;
