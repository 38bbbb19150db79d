use serde::Serialize;

use crate::actions::{ActionCode, ActionData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionEntry {
    pub code: ActionCode,
    pub title: String,
    pub enabled: bool,
    pub checked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ActionData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    Action(ActionEntry),
    Separator,
    Submenu {
        title: String,
        enabled: bool,
        items: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn title(&self) -> Option<&str> {
        match self {
            MenuEntry::Action(action) => Some(action.title.as_str()),
            MenuEntry::Submenu { title, .. } => Some(title.as_str()),
            MenuEntry::Separator => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            MenuEntry::Action(action) => action.enabled,
            MenuEntry::Submenu { enabled, .. } => *enabled,
            MenuEntry::Separator => true,
        }
    }

    pub fn as_action(&self) -> Option<&ActionEntry> {
        match self {
            MenuEntry::Action(action) => Some(action),
            _ => None,
        }
    }

    pub fn children(&self) -> &[MenuEntry] {
        match self {
            MenuEntry::Submenu { items, .. } => items,
            _ => &[],
        }
    }
}

/// Snapshot of the whole menu bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuTree {
    pub items: Vec<MenuEntry>,
}

impl MenuTree {
    pub fn new(items: Vec<MenuEntry>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every action entry, depth first, in menu order.
    pub fn actions(&self) -> Vec<&ActionEntry> {
        let mut out = Vec::new();
        collect_actions(&self.items, &mut out);
        out
    }

    /// First action entry with `code`, searching depth first.
    pub fn find(&self, code: &str) -> Option<&ActionEntry> {
        self.actions().into_iter().find(|a| a.code == code)
    }

    /// Looks up a submenu by its path of display titles, e.g. `["View", "Workspaces"]`.
    pub fn submenu(&self, path: &[&str]) -> Option<&MenuEntry> {
        let (first, rest) = path.split_first()?;
        let mut current = find_submenu(&self.items, first)?;
        for title in rest {
            current = find_submenu(current.children(), title)?;
        }
        Some(current)
    }
}

fn collect_actions<'a>(items: &'a [MenuEntry], out: &mut Vec<&'a ActionEntry>) {
    for item in items {
        match item {
            MenuEntry::Action(action) => out.push(action),
            MenuEntry::Submenu { items, .. } => collect_actions(items, out),
            MenuEntry::Separator => {}
        }
    }
}

fn find_submenu<'a>(items: &'a [MenuEntry], title: &str) -> Option<&'a MenuEntry> {
    items.iter().find(|item| {
        matches!(item, MenuEntry::Submenu { .. })
            && item.title().map(display_title).as_deref() == Some(title)
    })
}

/// Strips `&` mnemonic markers from a title; `&&` yields a literal `&`.
pub fn display_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut chars = title.chars();
    while let Some(c) = chars.next() {
        if c == '&' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}
