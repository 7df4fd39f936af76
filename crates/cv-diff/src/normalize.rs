//! Key normalization helpers shared by the strategies.

use std::sync::LazyLock;

use regex::Regex;

/// Suffix the authority appends when it pushes a certificate into the
/// credential store: `_<dd><mmm><yy>_<XX><dd>`, for example `_20nov25_DE13`.
///
/// Names that happen to contain this shape are stripped as well.
static GENERATED_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*)_[0-9]{2}[a-z]{3}[0-9]{2}_[A-Z]{2}[0-9]{2}").expect("suffix pattern is valid")
});

/// Apply `step` to `key` until the output stops changing.
///
/// Each step must shorten its input or leave it unchanged once applied, or
/// the loop does not end.
pub(crate) fn until_stable(key: &str, step: impl Fn(&str) -> String) -> String {
    let mut current = step(key);
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Strip every leading repetition of `prefix` from `key`.
pub(crate) fn strip_repeated_prefix<'k>(key: &'k str, prefix: &str) -> &'k str {
    if prefix.is_empty() {
        return key;
    }
    let mut rest = key;
    while let Some(stripped) = rest.strip_prefix(prefix) {
        rest = stripped;
    }
    rest
}

/// Remove the authority's generated-name suffix.
///
/// Stripping repeats until no suffix remains, so the result is stable under
/// re-application.
pub fn remove_generated_suffix(name: &str) -> String {
    until_stable(name, |s| GENERATED_SUFFIX.replace_all(s, "${1}").into_owned())
}

/// The last `/`-delimited segment of a credential name.
pub fn extract_last_segment(name: &str) -> &str {
    name.rfind('/').map_or(name, |i| &name[i + 1..])
}

/// Reduce a credential store name to the common name it was created from.
pub fn credential_name_key(name: &str) -> String {
    remove_generated_suffix(extract_last_segment(name))
}

/// `/`-separated form of a path with `prefix` and leading slashes removed.
///
/// Backslashes are converted in both the path and the prefix, so authority
/// object paths and credential names share one namespace. The prefix and
/// slashes are removed until neither remains at the front, so `a/a/x` with
/// prefix `a` becomes `x`.
pub fn normalize_path(path: &str, prefix: &str) -> String {
    let prefix = prefix.replace('\\', "/");
    let path = path.replace('\\', "/");
    until_stable(&path, |p| {
        strip_repeated_prefix(p, &prefix)
            .trim_start_matches('/')
            .to_string()
    })
}
