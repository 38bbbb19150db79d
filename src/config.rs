use std::{
    collections::HashMap,
    env,
    fs,
    path::Path,
    path::PathBuf,
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::actions::{InMemoryActionRegistry, InMemoryShortcutRegistry};
use crate::context::{InMemoryWorkspaces, WorkspaceDescriptor};
use crate::menu::MenuSettings;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Adds "Check for Update" to the Help menu.
    #[serde(default)]
    pub app_updatable: bool,

    /// Action codes removed from the built-in registry.
    #[serde(default)]
    pub disabled_actions: Vec<String>,

    /// Shortcut overrides keyed by action code; an empty string unbinds.
    #[serde(default)]
    pub shortcuts: HashMap<String, String>,

    #[serde(default)]
    pub workspaces: Vec<WorkspaceConfig>,

    #[serde(default)]
    pub current_workspace: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,
}

pub struct ResolvedConfig {
    pub actions: InMemoryActionRegistry,
    pub shortcuts: InMemoryShortcutRegistry,
    pub workspaces: InMemoryWorkspaces,
    pub settings: MenuSettings,
}

pub fn load_optional() -> Result<Option<Config>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(cfg))
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("APPMENU_CONFIG") {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("appmenu.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("appmenu").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("appmenu").join("config.json"));
    }

    None
}

fn require_config_path() -> Result<PathBuf> {
    resolve_config_path().ok_or_else(|| {
        anyhow!("No config path available (set APPMENU_CONFIG or ensure APPDATA/HOME is present)")
    })
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let path = require_config_path()?;
    ensure_config_file_at(&path)?;
    Ok(path)
}

pub fn ensure_config_file_at(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    if !path.exists() {
        let workspaces = default_workspaces()
            .into_iter()
            .map(|w| serde_json::json!({ "name": w.name, "title": w.title }))
            .collect::<Vec<_>>();
        let template = serde_json::json!({
            "app_updatable": false,
            "disabled_actions": [],
            "shortcuts": {},
            "workspaces": workspaces,
            "current_workspace": DEFAULT_WORKSPACE,
        });
        let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
        s.push('\n');
        fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(())
}

pub fn patch_current_workspace(name: &str) -> Result<PathBuf> {
    let path = require_config_path()?;
    patch_current_workspace_at(&path, name)?;
    Ok(path)
}

/// Rewrites only `current_workspace`, leaving every other key untouched.
pub fn patch_current_workspace_at(path: &Path, name: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    let mut root = read_json_or_empty_object(path)?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| anyhow!("config root must be a JSON object"))?;

    obj.insert(
        "current_workspace".to_string(),
        Value::String(name.to_string()),
    );

    let mut s = serde_json::to_string_pretty(&root).context("serialize config")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn read_json_or_empty_object(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(Default::default()));
    }

    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let v: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(v)
}

const DEFAULT_WORKSPACE: &str = "Basic";

pub fn default_workspaces() -> Vec<WorkspaceDescriptor> {
    vec![
        WorkspaceDescriptor::new("Advanced", "Advanced"),
        WorkspaceDescriptor::new("Basic", "Basic"),
    ]
}

pub fn resolve(config: Option<&Config>) -> ResolvedConfig {
    let mut actions = InMemoryActionRegistry::builtin();
    let mut shortcuts = InMemoryShortcutRegistry::builtin();

    let Some(cfg) = config else {
        return ResolvedConfig {
            actions,
            shortcuts,
            workspaces: InMemoryWorkspaces::new(
                default_workspaces(),
                Some(DEFAULT_WORKSPACE.to_string()),
            ),
            settings: MenuSettings::default(),
        };
    };

    for code in &cfg.disabled_actions {
        if actions.unregister(code).is_none() {
            tracing::warn!(code = %code, "disabled action is not in the catalogue");
        }
    }

    for (code, sequence) in &cfg.shortcuts {
        shortcuts.bind(code.as_str(), sequence.as_str());
    }

    let (workspaces, current) = if cfg.workspaces.is_empty() {
        let current = cfg
            .current_workspace
            .clone()
            .or_else(|| Some(DEFAULT_WORKSPACE.to_string()));
        (default_workspaces(), current)
    } else {
        let list = cfg
            .workspaces
            .iter()
            .map(|w| {
                WorkspaceDescriptor::new(
                    w.name.as_str(),
                    w.title.clone().unwrap_or_else(|| w.name.clone()),
                )
            })
            .collect::<Vec<_>>();
        (list, cfg.current_workspace.clone())
    };

    ResolvedConfig {
        actions,
        shortcuts,
        workspaces: InMemoryWorkspaces::new(workspaces, current),
        settings: MenuSettings {
            app_updatable: cfg.app_updatable,
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::{ActionRegistry, ShortcutRegistry};
    use crate::context::WorkspaceRegistry;

    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = load_from(&dir.path().join("absent.json")).expect("load");
        assert!(cfg.is_none());
    }

    #[test]
    fn every_field_is_optional() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("appmenu.json");
        fs::write(&path, "{}").expect("write");

        let cfg = load_from(&path).expect("load").expect("present");
        assert!(!cfg.app_updatable);
        assert!(cfg.disabled_actions.is_empty());
        assert!(cfg.workspaces.is_empty());
        assert!(cfg.current_workspace.is_none());
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");

        let err = load_from(&path).expect_err("parse error");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn resolve_applies_overrides() {
        let cfg: Config = serde_json::from_value(serde_json::json!({
            "app_updatable": true,
            "disabled_actions": ["print", "not-in-catalogue"],
            "shortcuts": { "file-save": "", "file-import": "Ctrl+I" },
            "workspaces": [
                { "name": "B" },
                { "name": "A", "title": "Alpha" }
            ],
            "current_workspace": "A"
        }))
        .expect("config");

        let resolved = resolve(Some(&cfg));
        assert!(resolved.settings.app_updatable);
        assert!(resolved.actions.resolve("print").is_none());
        assert!(resolved.actions.resolve("file-save").is_some());
        assert!(resolved.shortcuts.lookup("file-save").is_none());
        assert_eq!(resolved.shortcuts.lookup("file-import").as_deref(), Some("Ctrl+I"));

        let listed = resolved.workspaces.list_workspaces().expect("list");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "B");
        assert_eq!(
            resolved.workspaces.current_workspace().map(|w| w.title),
            Some("Alpha".to_string())
        );
    }

    #[test]
    fn resolve_without_config_uses_defaults() {
        let resolved = resolve(None);
        assert!(!resolved.settings.app_updatable);
        assert_eq!(
            resolved.workspaces.current_workspace().map(|w| w.name),
            Some(DEFAULT_WORKSPACE.to_string())
        );
    }

    #[test]
    fn init_writes_loadable_template() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.json");

        ensure_config_file_at(&path).expect("init");
        let cfg = load_from(&path).expect("load").expect("present");
        assert_eq!(cfg.workspaces.len(), 2);
        assert_eq!(cfg.current_workspace.as_deref(), Some(DEFAULT_WORKSPACE));
    }

    #[test]
    fn patch_keeps_other_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "app_updatable": true, "custom": 1 }"#).expect("write");

        patch_current_workspace_at(&path, "Advanced").expect("patch");

        let raw: Value = serde_json::from_slice(&fs::read(&path).expect("read")).expect("json");
        assert_eq!(raw["current_workspace"], "Advanced");
        assert_eq!(raw["app_updatable"], true);
        assert_eq!(raw["custom"], 1);
    }

    #[test]
    fn patch_rejects_non_object_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "[1, 2]").expect("write");

        assert!(patch_current_workspace_at(&path, "Basic").is_err());
    }
}
