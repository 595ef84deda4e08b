use crate::{Error, Result};

/// Parsed GitHub repository information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub owner: String,
    pub repo: String,
}

/// Parse a repository reference into owner and name.
///
/// The last two path segments win, so all of these resolve to `acme/widgets`:
/// - https://github.com/acme/widgets
/// - https://github.com/acme/widgets/
/// - https://github.com/acme/widgets.git
/// - github.com/acme/widgets
/// - acme/widgets
pub fn parse_repository_url(url: &str) -> Result<RepositoryInfo> {
    let url = url.trim().trim_end_matches('/');

    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 2 {
        return Err(Error::InvalidReference("Invalid GitHub URL".to_string()));
    }

    let owner = parts[parts.len() - 2].trim();
    let repo = parts[parts.len() - 1].trim();
    let repo = repo.strip_suffix(".git").unwrap_or(repo);

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::InvalidReference(
            "Repository owner and name cannot be empty".to_string(),
        ));
    }

    if !is_valid_segment(owner) || !is_valid_segment(repo) {
        return Err(Error::InvalidReference(
            "Repository owner and name may only contain letters, digits, '.', '-' and '_'"
                .to_string(),
        ));
    }

    Ok(RepositoryInfo {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// Segments go straight into API paths, so only GitHub's name alphabet is allowed
fn is_valid_segment(segment: &str) -> bool {
    segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}
