use crate::actions::{ActionData, ActionRegistry, ShortcutRegistry};
use crate::context::WorkspaceRegistry;
use crate::menu::item::{ActionEntry, MenuEntry, MenuTree};
use crate::menu::state::{Gate, MenuState, Toggle};
use crate::menu::state::Gate::{
    Always, CanRedo, CanUndo, DocumentOpen as Doc, HasSelection as Sel, NeedsSave,
};

pub const SELECT_WORKSPACE: &str = "select-workspace";
pub const CHECK_UPDATE: &str = "check-update";
pub const WORKSPACE_SECTION: &str = "workspaces";

/// Application-level switches that change the shape of the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuSettings {
    pub app_updatable: bool,
}

/// One authored position in the menu layout.
#[derive(Debug)]
pub enum Slot {
    Action {
        code: &'static str,
        gate: Gate,
        toggle: Option<Toggle>,
    },
    Separator,
    Submenu {
        title: &'static str,
        gate: Gate,
        items: &'static [Slot],
    },
    /// Data-driven workspace list followed by the workspace management actions.
    Workspaces { title: &'static str },
    /// Present only when the application can update itself.
    IfUpdatable { code: &'static str },
}

const SEP: Slot = Slot::Separator;

const fn act(code: &'static str) -> Slot {
    gated(code, Gate::Always)
}

const fn gated(code: &'static str, gate: Gate) -> Slot {
    Slot::Action {
        code,
        gate,
        toggle: None,
    }
}

const fn toggled(code: &'static str, gate: Gate, toggle: Toggle) -> Slot {
    Slot::Action {
        code,
        gate,
        toggle: Some(toggle),
    }
}

const fn menu(title: &'static str, gate: Gate, items: &'static [Slot]) -> Slot {
    Slot::Submenu { title, gate, items }
}

pub const MENU_BAR: &[Slot] = &[
    menu("&File", Always, FILE),
    menu("&Edit", Always, EDIT),
    menu("&View", Always, VIEW),
    menu("&Add", Doc, ADD),
    menu("F&ormat", Doc, FORMAT),
    menu("&Tools", Doc, TOOLS),
    menu("&Help", Always, HELP),
];

const FILE: &[Slot] = &[
    act("file-new"),
    act("file-open"),
    act("file-import"),
    SEP,
    gated("file-close", Doc),
    gated("file-save", NeedsSave),
    gated("file-save-as", Doc),
    gated("file-save-a-copy", Doc),
    gated("file-save-selection", Sel),
    gated("file-save-online", Doc),
    SEP,
    act("file-import-pdf"),
    gated("file-export", Doc),
    SEP,
    gated("edit-info", Doc),
    gated("parts", Doc),
    SEP,
    gated("print", Doc),
    SEP,
    act("quit"),
];

const EDIT: &[Slot] = &[
    gated("undo", CanUndo),
    gated("redo", CanRedo),
    SEP,
    gated("cut", Sel),
    gated("copy", Sel),
    gated("paste", Sel),
    gated("paste-half", Sel),
    gated("paste-double", Sel),
    gated("paste-special", Sel),
    gated("swap", Sel),
    gated("delete", Sel),
    SEP,
    gated("select-all", Doc),
    gated("select-similar", Sel),
    gated("find", Doc),
    SEP,
    act("preference-dialog"),
];

const VIEW: &[Slot] = &[
    act("toggle-palette"),
    act("masterpalette"),
    act("inspector"),
    act("toggle-playpanel"),
    act("toggle-navigator"),
    act("toggle-timeline"),
    act("toggle-mixer"),
    act("synth-control"),
    act("toggle-selection-window"),
    act("toggle-piano"),
    gated("toggle-scorecmp-tool", Doc),
    SEP,
    gated("zoomin", Doc),
    gated("zoomout", Doc),
    SEP,
    Slot::Workspaces {
        title: "W&orkspaces",
    },
    SEP,
    gated("split-h", Doc),
    gated("split-v", Doc),
    SEP,
    gated("show-invisible", Doc),
    gated("show-unprintable", Doc),
    gated("show-frames", Doc),
    gated("show-pageborders", Doc),
    gated("mark-irregular", Doc),
    SEP,
    act("fullscreen"),
];

const WORKSPACE_MANAGEMENT: &[Slot] = &[
    act("new-workspace"),
    act("edit-workspace"),
    act("delete-workspace"),
    act("reset-workspace"),
];

const ADD: &[Slot] = &[
    menu("N&otes", Always, NOTES),
    menu("&Intervals", Always, INTERVALS),
    menu("T&uplets", Always, TUPLETS),
    SEP,
    menu("&Measures", Always, ADD_MEASURES),
    menu("&Frames", Always, FRAMES),
    menu("&Text", Always, TEXT),
    menu("&Lines", Always, LINES),
];

const NOTES: &[Slot] = &[
    toggled("note-input", Doc, Toggle::NoteInput),
    SEP,
    gated("note-c", Sel),
    gated("note-d", Sel),
    gated("note-e", Sel),
    gated("note-f", Sel),
    gated("note-g", Sel),
    gated("note-a", Sel),
    gated("note-b", Sel),
    SEP,
    gated("chord-c", Sel),
    gated("chord-d", Sel),
    gated("chord-e", Sel),
    gated("chord-f", Sel),
    gated("chord-g", Sel),
    gated("chord-a", Sel),
    gated("chord-b", Sel),
];

const INTERVALS: &[Slot] = &[
    gated("interval1", Sel),
    gated("interval2", Sel),
    gated("interval3", Sel),
    gated("interval4", Sel),
    gated("interval5", Sel),
    gated("interval6", Sel),
    gated("interval7", Sel),
    gated("interval8", Sel),
    gated("interval9", Sel),
    SEP,
    gated("interval-2", Sel),
    gated("interval-3", Sel),
    gated("interval-4", Sel),
    gated("interval-5", Sel),
    gated("interval-6", Sel),
    gated("interval-7", Sel),
    gated("interval-8", Sel),
    gated("interval-9", Sel),
];

const TUPLETS: &[Slot] = &[
    gated("duplet", Sel),
    gated("triplet", Sel),
    gated("quadruplet", Sel),
    gated("quintuplet", Sel),
    gated("sextuplet", Sel),
    gated("septuplet", Sel),
    gated("octuplet", Sel),
    gated("nonuplet", Sel),
    gated("tuplet-dialog", Sel),
];

const ADD_MEASURES: &[Slot] = &[
    gated("insert-measure", Sel),
    gated("insert-measures", Sel),
    SEP,
    gated("append-measure", Doc),
    gated("append-measures", Doc),
];

const FRAMES: &[Slot] = &[
    gated("insert-hbox", Sel),
    gated("insert-vbox", Sel),
    gated("insert-textframe", Sel),
    SEP,
    gated("append-hbox", Doc),
    gated("append-vbox", Doc),
    gated("append-textframe", Doc),
];

const TEXT: &[Slot] = &[
    gated("title-text", Doc),
    gated("subtitle-text", Doc),
    gated("composer-text", Doc),
    gated("poet-text", Doc),
    gated("part-text", Doc),
    SEP,
    gated("system-text", Sel),
    gated("staff-text", Sel),
    gated("expression-text", Sel),
    gated("rehearsalmark-text", Sel),
    gated("instrument-change-text", Sel),
    gated("fingering-text", Sel),
    SEP,
    gated("sticking-text", Sel),
    gated("chord-text", Sel),
    gated("roman-numeral-text", Sel),
    gated("nashville-number-text", Sel),
    gated("lyrics", Sel),
    gated("figured-bass", Sel),
    gated("tempo", Sel),
];

const LINES: &[Slot] = &[
    gated("add-slur", Sel),
    gated("add-hairpin", Sel),
    gated("add-hairpin-reverse", Sel),
    gated("add-8va", Sel),
    gated("add-8vb", Sel),
    gated("add-noteline", Sel),
];

const FORMAT: &[Slot] = &[
    gated("edit-style", Doc),
    gated("page-settings", Doc),
    SEP,
    menu("&Stretch", Always, STRETCH),
    SEP,
    gated("reset-text-style-overrides", Doc),
    gated("reset-beammode", Doc),
    gated("reset", Sel),
    SEP,
    gated("load-style", Doc),
    gated("save-style", Doc),
];

const STRETCH: &[Slot] = &[
    gated("stretch+", Sel),
    gated("stretch-", Sel),
    gated("reset-stretch", Sel),
];

const TOOLS: &[Slot] = &[
    gated("transpose", Doc),
    SEP,
    gated("explode", Sel),
    gated("implode", Sel),
    gated("realize-chord-symbols", Sel),
    menu("&Voices", Always, VOICES),
    menu("&Measures", Always, TOOLS_MEASURES),
    gated("time-delete", Sel),
    SEP,
    gated("slash-fill", Sel),
    gated("slash-rhythm", Sel),
    SEP,
    gated("pitch-spell", Doc),
    gated("reset-groupings", Doc),
    gated("resequence-rehearsal-marks", Doc),
    gated("unroll-repeats", Doc),
    SEP,
    gated("copy-lyrics-to-clipboard", Doc),
    gated("fotomode", Doc),
    gated("del-empty-measures", Doc),
];

const VOICES: &[Slot] = &[
    gated("voice-x12", Sel),
    gated("voice-x13", Sel),
    gated("voice-x14", Sel),
    gated("voice-x23", Sel),
    gated("voice-x24", Sel),
    gated("voice-x34", Sel),
];

const TOOLS_MEASURES: &[Slot] = &[gated("split-measure", Sel), gated("join-measures", Sel)];

const HELP: &[Slot] = &[
    act("online-handbook"),
    menu("&Tours", Always, TOURS),
    SEP,
    act("about"),
    act("about-qt"),
    act("about-musicxml"),
    Slot::IfUpdatable { code: CHECK_UPDATE },
    SEP,
    act("ask-help"),
    act("report-bug"),
    act("leave-feedback"),
    SEP,
    act("revert-factory"),
];

const TOURS: &[Slot] = &[act("show-tours"), act("reset-tours")];

/// Every action code the layout can reference, in layout order.
pub fn layout_codes() -> Vec<&'static str> {
    let mut out = Vec::new();
    collect_codes(MENU_BAR, &mut out);
    out
}

fn collect_codes(slots: &'static [Slot], out: &mut Vec<&'static str>) {
    for slot in slots {
        match slot {
            Slot::Action { code, .. } | Slot::IfUpdatable { code } => out.push(*code),
            Slot::Submenu { items, .. } => collect_codes(items, out),
            Slot::Workspaces { .. } => {
                out.push(SELECT_WORKSPACE);
                collect_codes(WORKSPACE_MANAGEMENT, out);
            }
            Slot::Separator => {}
        }
    }
}

/// Resolves the static layout against the registries for one rebuild.
pub struct MenuBuilder<'a> {
    pub actions: &'a dyn ActionRegistry,
    pub shortcuts: &'a dyn ShortcutRegistry,
    pub workspaces: &'a dyn WorkspaceRegistry,
    pub settings: MenuSettings,
    pub state: MenuState,
}

impl MenuBuilder<'_> {
    pub fn build(&self) -> MenuTree {
        MenuTree::new(self.build_items(MENU_BAR))
    }

    fn build_items(&self, slots: &[Slot]) -> Vec<MenuEntry> {
        let mut items = Vec::with_capacity(slots.len());

        for slot in slots {
            match slot {
                Slot::Action { code, gate, toggle } => {
                    let checked = toggle.is_some_and(|t| t.eval(&self.state));
                    if let Some(entry) = self.make_action(code, gate.eval(&self.state), checked) {
                        items.push(MenuEntry::Action(entry));
                    }
                }
                Slot::Separator => items.push(MenuEntry::Separator),
                Slot::Submenu {
                    title,
                    gate,
                    items: children,
                } => items.push(MenuEntry::Submenu {
                    title: title.to_string(),
                    enabled: gate.eval(&self.state),
                    items: self.build_items(children),
                }),
                Slot::Workspaces { title } => items.push(MenuEntry::Submenu {
                    title: title.to_string(),
                    enabled: true,
                    items: self.workspace_items(),
                }),
                Slot::IfUpdatable { code } => {
                    if !self.settings.app_updatable {
                        continue;
                    }
                    if let Some(entry) = self.make_action(code, true, false) {
                        items.push(MenuEntry::Action(entry));
                    }
                }
            }
        }

        items
    }

    fn make_action(&self, code: &str, enabled: bool, checked: bool) -> Option<ActionEntry> {
        let Some(action) = self.actions.resolve(code) else {
            tracing::debug!(code, "action not registered, omitting menu entry");
            return None;
        };

        Some(ActionEntry {
            shortcut: self.shortcuts.lookup(&action.code),
            code: action.code,
            title: action.title,
            enabled,
            checked,
            section: None,
            data: action.data,
        })
    }

    fn workspace_items(&self) -> Vec<MenuEntry> {
        let mut workspaces = match self.workspaces.list_workspaces() {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(error = %err, "listing workspaces failed");
                return Vec::new();
            }
        };
        workspaces.sort_by(|a, b| a.name.cmp(&b.name));

        let current = self.workspaces.current_workspace().map(|w| w.name);

        let mut items = Vec::with_capacity(workspaces.len() + WORKSPACE_MANAGEMENT.len() + 1);
        for workspace in workspaces {
            let checked = current.as_deref() == Some(workspace.name.as_str());
            let Some(mut entry) = self.make_action(SELECT_WORKSPACE, true, checked) else {
                break;
            };
            entry.title = workspace.title;
            entry.section = Some(WORKSPACE_SECTION.to_string());
            entry.data = Some(ActionData::arg(workspace.name));
            items.push(MenuEntry::Action(entry));
        }

        items.push(MenuEntry::Separator);
        items.extend(self.build_items(WORKSPACE_MANAGEMENT));
        items
    }
}
