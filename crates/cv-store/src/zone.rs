//! Authority policy-zone paths.
//!
//! The authority addresses folders as backslash-separated paths rooted at
//! `\VED`. Users usually type the zone without that root.

/// Root a zone under `\VED\`, tolerating an existing `\` or `VED\` prefix.
pub fn prepend_ved_root(zone: &str) -> String {
    let zone = zone.strip_prefix('\\').unwrap_or(zone);
    let zone = zone.strip_prefix("VED\\").unwrap_or(zone);
    format!("\\VED\\{zone}")
}

/// Root a zone under `\VED\Policy\`, tolerating an existing `Policy\` prefix.
pub fn prepend_policy_root(zone: &str) -> String {
    let zone = zone.strip_prefix('\\').unwrap_or(zone);
    let zone = zone.strip_prefix("Policy\\").unwrap_or(zone);
    prepend_ved_root(&format!("\\Policy\\{zone}"))
}
