/// Separators recognised in file paths handed over by editors
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Return the final segment of `path`
///
/// Both `/` and `\` count as separators whatever the host platform is, since
/// the path may come from a Windows editor. Trailing separators are ignored.
/// An empty path yields an empty name.
pub fn base_name(path: &str) -> String {
    let trimmed = path.trim_end_matches(SEPARATORS);
    trimmed
        .rsplit(SEPARATORS)
        .next()
        .unwrap_or_default()
        .to_string()
}
