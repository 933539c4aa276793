// system-tests/src/hook_config/model.rs
// ============================================================================
// Module: Hook Configuration Model
// Description: Serde model for `.pre-commit-config.yaml` documents.
// Purpose: Build and render the layered guard-rail hook wiring.
// Dependencies: serde, serde_yaml
// ============================================================================

//! ## Overview
//! The layered wiring keeps linter hooks local (`language: system`) so no
//! network clone is needed for them; only the generic utility hooks pull one
//! pinned upstream repository, which the hook manager caches.

use serde::Serialize;

/// Upstream repository providing the generic utility hooks.
const UTILITY_HOOKS_REPO: &str = "https://github.com/pre-commit/pre-commit-hooks";

/// Pinned revision of the utility hooks repository.
const UTILITY_HOOKS_REV: &str = "v4.6.0";

/// Staged-file size cap enforced by the large-file hook, in kilobytes.
pub const LARGE_FILE_LIMIT_KB: u32 = 500;

// ============================================================================
// SECTION: Document Types
// ============================================================================

/// Top-level hook manager configuration document.
#[derive(Debug, Clone, Serialize)]
pub struct HookConfig {
    /// Hook repositories in execution order.
    pub repos: Vec<HookRepo>,
}

/// One hook repository entry.
#[derive(Debug, Clone, Serialize)]
pub struct HookRepo {
    /// Repository source: a URL or the `local` sentinel.
    pub repo: String,
    /// Pinned revision; absent for local repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    /// Hooks activated from this repository.
    pub hooks: Vec<HookDef>,
}

/// One hook activation.
#[derive(Debug, Clone, Serialize)]
pub struct HookDef {
    /// Hook identifier.
    pub id: String,
    /// Display name; defaults to the id when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Command run for local hooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Hook language; `system` for locally installed binaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Extra arguments appended to the hook entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// File pattern limiting which staged files the hook sees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
}

impl HookDef {
    /// Builds a bare hook activation with only an id.
    fn id_only(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            entry: None,
            language: None,
            args: Vec::new(),
            files: None,
        }
    }

    /// Builds a local `language: system` hook over a file pattern.
    fn system(id: &str, entry: &str, files: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Some(id.to_string()),
            entry: Some(entry.to_string()),
            language: Some("system".to_string()),
            args: Vec::new(),
            files: Some(files.to_string()),
        }
    }
}

// ============================================================================
// SECTION: Layered Wiring
// ============================================================================

impl HookConfig {
    /// Builds the default layered guard-rail wiring.
    #[must_use]
    pub fn layered() -> Self {
        let linters = HookRepo {
            repo: "local".to_string(),
            rev: None,
            hooks: vec![
                HookDef::system("biome-check", "biome check", r"\.(js|mjs|cjs|jsx|ts|tsx)$"),
                HookDef::system("ruff-check", "ruff check", r"\.py$"),
            ],
        };
        let mut large_files = HookDef::id_only("check-added-large-files");
        large_files.args = vec![format!("--maxkb={LARGE_FILE_LIMIT_KB}")];
        let mut branch_guard = HookDef::id_only("no-commit-to-branch");
        branch_guard.args = vec![
            "--branch".to_string(),
            "master".to_string(),
            "--branch".to_string(),
            "main".to_string(),
        ];
        let utilities = HookRepo {
            repo: UTILITY_HOOKS_REPO.to_string(),
            rev: Some(UTILITY_HOOKS_REV.to_string()),
            hooks: vec![large_files, HookDef::id_only("detect-private-key"), branch_guard],
        };
        Self {
            repos: vec![linters, utilities],
        }
    }

    /// Renders the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn render(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|err| format!("hook config render failed: {err}"))
    }
}
