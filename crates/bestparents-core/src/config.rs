use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "bestparents.toml";

/// Edge selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// One global scan over both orientations of every pair.
    FullList,
    /// Per attribute: best child against best parent, with cross-checks.
    BestParentsAndChildren,
    /// Entropy-ordered breadth-first expansion from a root attribute.
    Wave,
    /// Per attribute: ranked child edges only.
    ChildrenOnly,
    /// Per attribute: ranked parent edges only.
    ParentsOnly,
}

impl StrategyKind {
    pub const ALL: [Self; 5] = [
        Self::FullList,
        Self::BestParentsAndChildren,
        Self::Wave,
        Self::ChildrenOnly,
        Self::ParentsOnly,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullList => "full-list",
            Self::BestParentsAndChildren => "best-parents-and-children",
            Self::Wave => "wave",
            Self::ChildrenOnly => "children-only",
            Self::ParentsOnly => "parents-only",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown strategy '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Knobs for one structure search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum parents per attribute. `0` disables parent edges entirely.
    #[serde(default = "default_max_parents")]
    pub max_parents: usize,
    /// Maximum children per attribute. `0` disables child edges entirely.
    #[serde(default = "default_max_children")]
    pub max_children: usize,
    #[serde(default = "default_strategy")]
    pub strategy: StrategyKind,
    /// Wave root; `None` means the last attribute (the class column).
    #[serde(default)]
    pub root: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_parents: default_max_parents(),
            max_children: default_max_children(),
            strategy: default_strategy(),
            root: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new(strategy: StrategyKind, max_parents: usize, max_children: usize) -> Self {
        Self {
            max_parents,
            max_children,
            strategy,
            root: None,
        }
    }

    #[must_use]
    pub const fn with_root(mut self, root: usize) -> Self {
        self.root = Some(root);
        self
    }
}

const fn default_max_parents() -> usize {
    1
}

const fn default_max_children() -> usize {
    1
}

const fn default_strategy() -> StrategyKind {
    StrategyKind::Wave
}

/// Top-level config file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Parse a config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Path of the per-user config file, if a config directory exists.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bestparents/config.toml"))
}

/// Resolve the effective config.
///
/// Precedence (first hit wins):
/// 1. `explicit` path (must exist)
/// 2. `bestparents.toml` in `project_root`
/// 3. the user config file
/// 4. defaults
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed.
pub fn resolve_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading explicit config");
        return load_config_file(path);
    }

    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.exists() {
        debug!(path = %project.display(), "loading project config");
        return load_config_file(&project);
    }

    if let Some(user) = user_config_path().filter(|p| p.exists()) {
        debug!(path = %user.display(), "loading user config");
        return load_config_file(&user);
    }

    Ok(ProjectConfig::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
