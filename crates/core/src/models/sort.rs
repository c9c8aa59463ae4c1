use std::str::FromStr;

/// Ordering criteria for the holdings list.
///
/// The string forms match the values a sort dropdown submits; a criterion
/// that fails to parse means "leave the list in insertion order".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Name ascending (case-insensitive)
    NameAsc,
    /// Name descending (case-insensitive)
    NameDesc,
    /// Total value (`price * amount`) ascending
    ValueAsc,
    /// Total value descending
    ValueDesc,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "value-asc" => Ok(SortKey::ValueAsc),
            "value-desc" => Ok(SortKey::ValueDesc),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::ValueAsc => "value-asc",
            SortKey::ValueDesc => "value-desc",
        };
        write!(f, "{s}")
    }
}
