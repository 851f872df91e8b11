/*
 * uses flat_map instead of map for the to_uppercase() and to_lowercase() calls.
 * This avoids the need for the match statement to handle empty words, as flat_map will simply produce
 * no output if the iterator is empty.
 */
pub fn snake_case_file_to_title_case(file_name: &str) -> String {
    let snake_case_string = file_name.split('.').next().unwrap_or(file_name);
    snake_case_string.split(|c| c == '_' || c == '-' || c == ' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            word.chars().take(1).flat_map(|c| c.to_uppercase())
                .chain(word.chars().skip(1).flat_map(|c| c.to_lowercase()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-cased extension after the last dot, `None` for dotfiles and names without one.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_lowercase())
}
