use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18n-detect.json";

pub const DEFAULT_DOCS_URL: &str = "https://github.com/internetarchive/openlibrary/wiki/Internationalization#internationalization-i18n-developers-guide";

/// Templates that had i18n errors or warnings when the check was introduced.
/// Chip away at these and remove them from the list.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "openlibrary/templates/design.html",
    "openlibrary/templates/internalerror.html",
    "openlibrary/templates/login.html",
    "openlibrary/templates/permission_denied.html",
    "openlibrary/templates/showmarc.html",
    "openlibrary/templates/status.html",
    "openlibrary/templates/work_search.html",
    "openlibrary/templates/showia.html",
    "openlibrary/templates/about/index.html",
    "openlibrary/templates/account/import.html",
    "openlibrary/templates/account/readinglog_stats.html",
    "openlibrary/templates/account/email/forgot.html",
    "openlibrary/templates/admin/attach_debugger.html",
    "openlibrary/templates/admin/block.html",
    "openlibrary/templates/admin/graphs.html",
    "openlibrary/templates/admin/history.html",
    "openlibrary/templates/admin/imports.html",
    "openlibrary/templates/admin/imports_by_date.html",
    "openlibrary/templates/admin/loans.html",
    "openlibrary/templates/admin/loans_table.html",
    "openlibrary/templates/admin/solr.html",
    "openlibrary/templates/admin/spamwords.html",
    "openlibrary/templates/admin/sponsorship.html",
    "openlibrary/templates/admin/sync.html",
    "openlibrary/templates/admin/inspect/memcache.html",
    "openlibrary/templates/admin/inspect/store.html",
    "openlibrary/templates/admin/ip/index.html",
    "openlibrary/templates/admin/memory/index.html",
    "openlibrary/templates/admin/memory/object.html",
    "openlibrary/templates/admin/people/index.html",
    "openlibrary/templates/admin/people/view.html",
    "openlibrary/templates/books/add.html",
    "openlibrary/templates/books/custom_carousel.html",
    "openlibrary/templates/books/mobile_carousel.html",
    "openlibrary/templates/books/works-show.html",
    "openlibrary/templates/books/edit/edition.html",
    "openlibrary/templates/books/edit/web.html",
    "openlibrary/templates/contact/spam/sent.html",
    "openlibrary/templates/email/case_created.html",
    "openlibrary/templates/home/loans.html",
    "openlibrary/templates/home/popular.html",
    "openlibrary/templates/home/returncart.html",
    "openlibrary/templates/jsdef/LazyAuthorPreview.html",
    "openlibrary/templates/jsdef/LazyWorkPreview.html",
    "openlibrary/templates/languages/index.html",
    "openlibrary/templates/lib/history.html",
    "openlibrary/templates/lib/nav_foot.html",
    "openlibrary/templates/lists/export_as_html.html",
    "openlibrary/templates/lists/feed_updates.html",
    "openlibrary/templates/lists/widget.html",
    "openlibrary/templates/my_books/dropdown_content.html",
    "openlibrary/templates/my_books/primary_action.html",
    "openlibrary/templates/observations/review_component.html",
    "openlibrary/templates/publishers/index.html",
    "openlibrary/templates/publishers/view.html",
    "openlibrary/templates/recentchanges/header.html",
    "openlibrary/templates/recentchanges/render.html",
    "openlibrary/templates/recentchanges/add-book/path.html",
    "openlibrary/templates/recentchanges/default/view.html",
    "openlibrary/templates/recentchanges/edit-book/path.html",
    "openlibrary/templates/recentchanges/merge/comment.html",
    "openlibrary/templates/recentchanges/merge/path.html",
    "openlibrary/templates/recentchanges/undo/view.html",
    "openlibrary/templates/search/snippets.html",
    "openlibrary/templates/site/alert.html",
    "openlibrary/templates/site/stats.html",
    "openlibrary/templates/type/about/view.html",
    "openlibrary/templates/type/author/rdf.html",
    "openlibrary/templates/type/author/view.html",
    "openlibrary/templates/type/edition/view.html",
    "openlibrary/templates/type/language/view.html",
    "openlibrary/templates/type/list/edit.html",
    "openlibrary/templates/type/list/exports.html",
    "openlibrary/templates/type/local_id/view.html",
    "openlibrary/templates/type/page/view.html",
    "openlibrary/templates/type/template/edit.html",
    "openlibrary/templates/type/template/view.html",
    "openlibrary/templates/type/type/view.html",
    "openlibrary/templates/type/work/view.html",
    "openlibrary/macros/FulltextSnippet.html",
    "openlibrary/macros/ManageLoansButtons.html",
    "openlibrary/macros/ManageWaitlistButton.html",
    "openlibrary/macros/QueryCarousel.html",
    "openlibrary/macros/RecentChangesAdmin.html",
    "openlibrary/macros/RecentChangesUsers.html",
    "openlibrary/macros/SearchResults.html",
    "openlibrary/macros/databarWork.html",
    "openlibrary/macros/WorkInfo.html",
    // Need more information to fix.
    "openlibrary/templates/books/edit.html",
    "openlibrary/templates/history/sources.html",
    // Outside the i18n directories.
    "openlibrary/admin/templates/admin/index.html",
    // Rendered as static html.
    "static/offline.html",
    "static/status-500.html",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories searched for `*.html` when no files are given.
    #[serde(default = "default_directories")]
    pub default_directories: Vec<String>,
    /// Paths (or glob patterns) skipped unless `--no-skip-excluded` is given.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    #[serde(default = "default_docs_url")]
    pub docs_url: String,
}

fn default_directories() -> Vec<String> {
    ["openlibrary/templates/", "openlibrary/macros/"]
        .map(String::from)
        .to_vec()
}

fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
}

fn default_docs_url() -> String {
    DEFAULT_DOCS_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_directories: default_directories(),
            excludes: default_excludes(),
            docs_url: default_docs_url(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any pattern in `excludes` is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.excludes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'excludes': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Compile the exclusion list. Call after [`Config::validate`].
    pub fn exclusion_set(&self) -> Result<ExclusionSet> {
        let patterns = self
            .excludes
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'excludes': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ExclusionSet { patterns })
    }
}

/// Files known to have unfixed violations.
#[derive(Debug, Default)]
pub struct ExclusionSet {
    patterns: Vec<Pattern>,
}

impl ExclusionSet {
    /// Whether `path` is on the list. Paths are compared with `/`
    /// separators and without a leading `./`.
    pub fn contains(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.patterns.iter().any(|p| p.matches(&path))
    }
}

fn normalize(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    match path.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => path,
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Load the config at `path`.
pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(ConfigLoadResult {
        config,
        path: Some(path.to_path_buf()),
    })
}

/// Discover a config file from `start_dir` upwards, or fall back to defaults.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
