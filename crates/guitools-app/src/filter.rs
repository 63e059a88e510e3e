//! Host file filter syntax.

/// One entry of a file filter: a description and its extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub description: String,
    /// Extensions without the leading `*.`, `*` standing for any file.
    pub extensions: Vec<String>,
}

/// Parse a filter such as `"Python files (*.py)|*.py|All Files (*.*)|*.*||"`.
///
/// Entries are `description|patterns` pairs, patterns separated by `;`.
/// The list ends with an empty entry; a trailing description without
/// patterns is ignored.
pub fn parse_filter(filter: &str) -> Vec<FilterEntry> {
    let parts: Vec<&str> = filter.split('|').collect();
    parts
        .chunks(2)
        .filter_map(|pair| match pair {
            [description, patterns] if !description.is_empty() && !patterns.is_empty() => {
                Some(FilterEntry {
                    description: description.to_string(),
                    extensions: patterns.split(';').filter_map(extension_of).collect(),
                })
            }
            _ => None,
        })
        .collect()
}

fn extension_of(pattern: &str) -> Option<String> {
    let pattern = pattern.trim();
    match pattern {
        "" => None,
        "*" | "*.*" => Some("*".to_string()),
        _ => Some(pattern.trim_start_matches('*').trim_start_matches('.').to_string()),
    }
}
