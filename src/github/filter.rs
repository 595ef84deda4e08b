use std::path::Path;

/// Extensions that carry no signal for a summary
const IGNORED_EXTENSIONS: [&str; 7] = ["png", "jpg", "gif", "zip", "exe", "pyc", "lock"];

/// Decide whether a root-level file name is worth sending to the model.
/// Hidden entries and binary or generated artifacts are dropped.
pub fn should_include_file(name: &str) -> bool {
    if name.starts_with('.') {
        return false;
    }

    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => !IGNORED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => true,
    }
}

/// Keep the names that pass [`should_include_file`], preserving order
pub fn filter_file_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| should_include_file(name))
        .collect()
}
