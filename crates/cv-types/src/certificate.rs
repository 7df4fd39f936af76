//! Certificate records as reported by the two inventories.
//!
//! Field names follow the JSON each system emits, so snapshots captured from
//! the authority and the credential store deserialize without adapters.

use serde::{Deserialize, Serialize};

/// A certificate listed by the issuing authority.
///
/// `id` is the authority's hierarchical object path (for example
/// `\VED\Policy\Certificates\Division 3\localhost`), `cn` the subject common
/// name and `thumbprint` the SHA-1 digest the authority computed. Any of them
/// may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateInfo {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "CN", default)]
    pub cn: String,
    #[serde(rename = "Thumbprint", default)]
    pub thumbprint: String,
    #[serde(rename = "Serial", default, skip_serializing_if = "String::is_empty")]
    pub serial: String,
    #[serde(rename = "SANS", default, skip_serializing_if = "Vec::is_empty")]
    pub san_dns: Vec<String>,
}

impl CertificateInfo {
    /// Record with only the object path set.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Record with only the common name set.
    pub fn with_cn(cn: impl Into<String>) -> Self {
        Self {
            cn: cn.into(),
            ..Default::default()
        }
    }
}

/// A certificate entry listed by the credential store.
///
/// `name` is the store's addressing key, flat (`aname`) or slash-delimited
/// (`/team/service/TestCert_20nov25_DE13`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateMetadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,
}

impl CertificateMetadata {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The PEM material stored under one credential name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateValue {
    #[serde(default)]
    pub ca: String,
    #[serde(default)]
    pub certificate: String,
    #[serde(default, skip_serializing)]
    pub private_key: String,
}

/// The latest version of a stored certificate credential.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub value: CertificateValue,
}

impl Certificate {
    /// A credential holding only a certificate body.
    pub fn from_pem(name: impl Into<String>, pem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: CertificateValue {
                certificate: pem.into(),
                ..Default::default()
            },
        }
    }
}
