//! Asset path parsing and display-title formatting.
//!
//! Asset paths are logical, `/`-separated and relative to the asset root,
//! e.g. `designs/Poster/summer-fest.png`.

/// Pieces derived from an asset path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPath {
    /// File name without its extension (everything before the last dot)
    pub id: String,

    /// Extension after the last dot, or empty
    pub ext: String,

    /// Final path segment
    pub file_name: String,

    /// Immediate parent directory name, or empty
    pub category: String,
}

/// Split an asset path into identifier, extension and category.
///
/// Never fails: malformed input degrades to empty strings.
pub fn parse_asset_path(path: &str) -> AssetPath {
    let file_name = path.rsplit('/').next().unwrap_or_default();

    let (id, ext) = match file_name.rfind('.') {
        Some(dot) => (&file_name[..dot], &file_name[dot + 1..]),
        None => (file_name, ""),
    };

    AssetPath {
        id: id.to_string(),
        ext: ext.to_string(),
        file_name: file_name.to_string(),
        category: category_from_path(path),
    }
}

/// Name of the directory directly containing the file
pub fn category_from_path(path: &str) -> String {
    let mut segments = path.rsplit('/');
    segments.next();
    segments.next().unwrap_or_default().to_string()
}

/// Turn a raw identifier into a label: `hello-world_two` -> `Hello World Two`.
///
/// Only the first character of each word changes case.
pub fn format_title(raw: &str) -> String {
    let mut title = String::with_capacity(raw.len());
    let mut prev_is_word = false;

    for c in raw.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        let is_word = c.is_alphanumeric();

        if is_word && !prev_is_word {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        prev_is_word = is_word;
    }

    title
}
