use std::fmt::Write as _;

use crate::menu::item::{display_title, MenuEntry, MenuTree};

const INDENT: &str = "  ";

/// Renders the tree as an indented outline, one entry per line.
///
/// ```text
/// File
///   [ ] New…                          Ctrl+N
///   ---
///   [ ] Close                         Ctrl+W  (disabled)
/// ```
pub fn render_text(tree: &MenuTree) -> String {
    let mut out = String::new();
    for item in &tree.items {
        render_entry(item, 0, &mut out);
    }
    out
}

fn render_entry(entry: &MenuEntry, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    match entry {
        MenuEntry::Separator => {
            let _ = writeln!(out, "{indent}---");
        }
        MenuEntry::Submenu {
            title,
            enabled,
            items,
        } => {
            let _ = writeln!(
                out,
                "{indent}{}{}",
                display_title(title),
                disabled_suffix(*enabled)
            );
            for item in items {
                render_entry(item, depth + 1, out);
            }
        }
        MenuEntry::Action(action) => {
            let mark = if action.checked { "[x]" } else { "[ ]" };
            let label = display_title(&action.title);
            let shortcut = action.shortcut.as_deref().unwrap_or_default();
            let line = format!("{indent}{mark} {label:<32}{shortcut}");
            let _ = writeln!(
                out,
                "{}{}",
                line.trim_end(),
                disabled_suffix(action.enabled)
            );
        }
    }
}

fn disabled_suffix(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        "  (disabled)"
    }
}
