// src/core/sanitize.rs

/// Collapse every run of whitespace (NBSP included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Filename component of a link target: everything after the last `/`,
/// ignoring trailing slashes. `"/rfc/scalar_type_hints/"` → `"scalar_type_hints"`.
pub fn basename(href: &str) -> &str {
    let href = href.trim_end_matches('/');
    match href.rfind('/') {
        Some(i) => &href[i + 1..],
        None => href,
    }
}

/// Strip a leading `prefix` ignoring ASCII case, then trim.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> &'a str {
    let t = s.trim_start();
    match t.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => t[prefix.len()..].trim(),
        _ => s.trim(),
    }
}

/// Split `"key<sep>value"` on the first matching separator, in the order given.
/// Both halves are trimmed; `None` when no separator occurs or the key is empty.
pub fn split_key_value<'a>(s: &'a str, seps: &[&str]) -> Option<(&'a str, &'a str)> {
    for sep in seps {
        if let Some(i) = s.find(sep) {
            let key = s[..i].trim();
            if key.is_empty() { continue; }
            return Some((key, s[i + sep.len()..].trim()));
        }
    }
    None
}

/// File-system safe stem for a store key.
pub fn sanitize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' { out.push(ch); }
        else { out.push('_'); }
    }
    let out = out.trim_matches('.').to_string();
    if out.is_empty() { s!("_") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_nbsp() {
        assert_eq!(normalize_ws("  Version:\u{a0}\n 0.5  "), "Version: 0.5");
    }

    #[test]
    fn basename_keeps_only_last_segment() {
        assert_eq!(basename("/rfc/scalar_type_hints"), "scalar_type_hints");
        assert_eq!(basename("https://wiki.php.net/rfc/enum?rev=3"), "enum?rev=3");
        assert_eq!(basename("plain"), "plain");
        assert_eq!(basename("/rfc/foo/"), "foo");
        assert_eq!(basename("trailing//"), "trailing");
        assert_eq!(basename("/"), "");
    }

    #[test]
    fn prefix_strip_is_case_insensitive() {
        assert_eq!(strip_prefix_ci("PHP RFC: Enumerations", "php rfc:"), "Enumerations");
        assert_eq!(strip_prefix_ci(" Enumerations ", "PHP RFC:"), "Enumerations");
    }

    #[test]
    fn key_value_uses_first_matching_separator() {
        assert_eq!(split_key_value("0.2 - Added: stuff", &[" - ", ":"]), Some(("0.2", "Added: stuff")));
        assert_eq!(split_key_value("Status: Draft", &[" - ", ":"]), Some(("Status", "Draft")));
        assert_eq!(split_key_value("no separator", &[":"]), None);
        assert_eq!(split_key_value(": empty key", &[":"]), None);
    }

    #[test]
    fn store_keys_are_path_safe() {
        assert_eq!(sanitize_key("scalar_type_hints"), "scalar_type_hints");
        assert_eq!(sanitize_key("../etc/passwd"), "_etc_passwd");
        assert_eq!(sanitize_key(""), "_");
    }
}
