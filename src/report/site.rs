use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::dashboard::state::DashboardState;
use crate::dashboard::view::render;
use crate::report::html::render_dashboard_html;

pub const DEFAULT_BASE_PATH: &str = "/member-management";
pub const DEFAULT_TITLE: &str = "Member Scoreboard";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix every link is served under, without a trailing slash. Empty
    /// means the site root.
    pub base_path: String,
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn new(base_path: &str, title: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
            title: title.to_string(),
        }
    }

    pub fn home_href(&self) -> String {
        format!("{}/", self.base_path)
    }

    pub fn member_href(&self, position: usize) -> String {
        format!("{}/members/{}/", self.base_path, position)
    }
}

/// `member-management/`, `/member-management` and `/member-management/` all
/// become `/member-management`; `/` and the empty string become the root.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub pages: usize,
    pub out_dir: PathBuf,
}

/// Writes `index.html`, one `members/<position>/index.html` per record and a
/// `.nojekyll` marker under `out_dir`.
pub fn export_site(
    state: &DashboardState,
    site: &SiteConfig,
    out_dir: &Path,
) -> Result<SiteSummary, ExportError> {
    create_dir(out_dir)?;

    let index = render(state);
    write_file(&out_dir.join("index.html"), &render_dashboard_html(&index, site))?;
    let mut pages = 1usize;

    for (position, member) in state.dataset().iter().enumerate() {
        let page_state = state.clone().select_member(member.clone());
        let html = render_dashboard_html(&render(&page_state), site);
        let dir = out_dir.join("members").join(position.to_string());
        create_dir(&dir)?;
        write_file(&dir.join("index.html"), &html)?;
        pages += 1;
    }

    write_file(&out_dir.join(".nojekyll"), "")?;

    info!(
        pages,
        out_dir = %out_dir.display(),
        base_path = %site.base_path,
        "static site written"
    );
    Ok(SiteSummary {
        pages,
        out_dir: out_dir.to_path_buf(),
    })
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/site.rs"]
mod tests;
