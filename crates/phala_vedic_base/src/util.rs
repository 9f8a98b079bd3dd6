//! Shared angle and name helpers used by every classification table.

/// Normalize an angle to [0, 360) degrees.
///
/// Non-finite input propagates unchanged; callers validate upstream.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Fold a free-form name into a lookup key: ASCII alphanumerics only, lowercased.
///
/// "Purva-Phalguni", "purva phalguni" and "PURVAPHALGUNI" all fold to
/// `purvaphalguni`.
pub fn fold_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Look up a folded name in an alias table.
pub(crate) fn lookup_alias<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    let key = fold_name(name);
    if key.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, value)| *value)
}
