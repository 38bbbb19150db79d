use std::rc::Rc;

use appmenu::{
    actions::{InMemoryActionRegistry, InMemoryShortcutRegistry, RecordingDispatcher},
    context::{InMemoryWorkspaces, SessionContext, SessionDocument, WorkspaceDescriptor},
    menu::{display_title, layout_codes, MenuEntry, MenuModel, MenuServices, MenuSettings, MenuTree},
};

const TOP_LEVEL: [&str; 7] = ["File", "Edit", "View", "Add", "Format", "Tools", "Help"];

struct Fixture {
    context: Rc<SessionContext>,
    dispatcher: Rc<RecordingDispatcher>,
    model: MenuModel,
}

fn fixture_with(actions: InMemoryActionRegistry, workspaces: InMemoryWorkspaces) -> Fixture {
    let context = Rc::new(SessionContext::new());
    let dispatcher = Rc::new(RecordingDispatcher::new());
    let model = MenuModel::new(MenuServices {
        actions: Rc::new(actions),
        shortcuts: Rc::new(InMemoryShortcutRegistry::builtin()),
        dispatcher: dispatcher.clone(),
        context: context.clone(),
        workspaces: Rc::new(workspaces),
        settings: MenuSettings::default(),
    });
    model.rebuild();

    Fixture {
        context,
        dispatcher,
        model,
    }
}

fn fixture() -> Fixture {
    fixture_with(InMemoryActionRegistry::builtin(), InMemoryWorkspaces::default())
}

fn top_level_titles(tree: &MenuTree) -> Vec<String> {
    tree.items
        .iter()
        .map(|entry| {
            assert!(matches!(entry, MenuEntry::Submenu { .. }));
            display_title(entry.title().unwrap_or_default())
        })
        .collect()
}

fn enabled(tree: &MenuTree, code: &str) -> bool {
    tree.find(code)
        .unwrap_or_else(|| panic!("{code} missing from menu"))
        .enabled
}

#[test]
fn top_level_menus_are_fixed_across_triggers() {
    let f = fixture();
    assert_eq!(top_level_titles(&f.model.current_tree()), TOP_LEVEL);

    let doc = Rc::new(SessionDocument::new());
    f.context.open(doc.clone());
    assert_eq!(top_level_titles(&f.model.current_tree()), TOP_LEVEL);

    doc.set_modified(true);
    assert_eq!(top_level_titles(&f.model.current_tree()), TOP_LEVEL);

    doc.set_selection(true);
    assert_eq!(top_level_titles(&f.model.current_tree()), TOP_LEVEL);

    f.context.close();
    assert_eq!(top_level_titles(&f.model.current_tree()), TOP_LEVEL);
}

#[test]
fn no_document_disables_document_commands() {
    let f = fixture();
    let tree = f.model.current_tree();

    for code in ["file-close", "file-save", "file-save-as", "edit-info", "parts", "print"] {
        assert!(!enabled(&tree, code), "{code} should be disabled");
    }
    for code in ["undo", "redo", "cut", "copy", "delete", "select-all"] {
        assert!(!enabled(&tree, code), "{code} should be disabled");
    }
    for code in ["file-new", "file-open", "quit"] {
        assert!(enabled(&tree, code), "{code} should be enabled");
    }

    for title in ["Add", "Format", "Tools"] {
        let submenu = tree.submenu(&[title]).expect("top-level menu");
        assert!(!submenu.is_enabled(), "{title} should be disabled");
    }
    assert!(tree.submenu(&["Help"]).is_some_and(MenuEntry::is_enabled));
}

#[test]
fn unsaved_changes_enable_save() {
    let f = fixture();
    let doc = Rc::new(SessionDocument::new());
    f.context.open(doc.clone());

    let tree = f.model.current_tree();
    assert!(enabled(&tree, "file-close"));
    assert!(!enabled(&tree, "file-save"));

    doc.set_modified(true);
    assert!(enabled(&f.model.current_tree(), "file-save"));
}

#[test]
fn selection_gates_clipboard_commands() {
    let f = fixture();
    let doc = Rc::new(SessionDocument::new());
    f.context.open(doc.clone());

    let tree = f.model.current_tree();
    for code in ["cut", "copy", "delete"] {
        assert!(!enabled(&tree, code), "{code} should need a selection");
    }

    doc.set_selection(true);
    let tree = f.model.current_tree();
    for code in ["cut", "copy", "delete"] {
        assert!(enabled(&tree, code), "{code} should be enabled");
    }

    doc.set_selection(false);
    assert!(!enabled(&f.model.current_tree(), "cut"));
}

#[test]
fn undo_history_drives_undo_and_redo() {
    let f = fixture();
    let doc = Rc::new(SessionDocument::new());
    f.context.open(doc.clone());

    doc.set_undo_state(true, false);
    let tree = f.model.current_tree();
    assert!(enabled(&tree, "undo"));
    assert!(!enabled(&tree, "redo"));

    doc.set_undo_state(false, true);
    let tree = f.model.current_tree();
    assert!(!enabled(&tree, "undo"));
    assert!(enabled(&tree, "redo"));
}

#[test]
fn note_input_mode_is_checked() {
    let f = fixture();
    let doc = Rc::new(SessionDocument::new());
    f.context.open(doc.clone());
    assert!(!f.model.current_tree().find("note-input").expect("note-input").checked);

    doc.set_note_input(true);
    let tree = f.model.current_tree();
    let note_input = tree.find("note-input").expect("note-input");
    assert!(note_input.checked);
    assert!(note_input.enabled);
}

#[test]
fn workspaces_are_sorted_and_current_is_checked() {
    let workspaces = InMemoryWorkspaces::new(
        vec![
            WorkspaceDescriptor::new("B", "Bravo"),
            WorkspaceDescriptor::new("A", "Alpha"),
            WorkspaceDescriptor::new("C", "Charlie"),
        ],
        Some("A".to_string()),
    );
    let f = fixture_with(InMemoryActionRegistry::builtin(), workspaces);
    let tree = f.model.current_tree();

    let submenu = tree
        .submenu(&["View", "Workspaces"])
        .expect("workspaces submenu");
    let selectors = submenu
        .children()
        .iter()
        .filter_map(MenuEntry::as_action)
        .filter(|a| a.code == "select-workspace")
        .collect::<Vec<_>>();

    let names = selectors
        .iter()
        .map(|a| a.data.as_ref().map(|d| d.args()[0].as_str()).unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["A", "B", "C"]);

    let titles = selectors.iter().map(|a| a.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);

    let checked = selectors.iter().filter(|a| a.checked).collect::<Vec<_>>();
    assert_eq!(checked.len(), 1);
    assert_eq!(checked[0].title, "Alpha");

    let children = submenu.children();
    assert_eq!(children[3], MenuEntry::Separator);
    let management = children[4..]
        .iter()
        .filter_map(MenuEntry::as_action)
        .map(|a| a.code.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        management,
        vec!["new-workspace", "edit-workspace", "delete-workspace", "reset-workspace"]
    );
}

#[test]
fn invoking_workspace_entry_passes_its_name() {
    let workspaces = InMemoryWorkspaces::new(
        vec![WorkspaceDescriptor::new("Basic", "Basic")],
        None,
    );
    let f = fixture_with(InMemoryActionRegistry::builtin(), workspaces);
    let tree = f.model.current_tree();
    let entry = tree.find("select-workspace").expect("workspace entry");
    assert!(!entry.checked);

    f.model.invoke_entry(entry);
    let dispatched = f.dispatcher.take();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].code, "select-workspace");
    assert_eq!(
        dispatched[0].data.as_ref().map(|d| d.args().to_vec()),
        Some(vec!["Basic".to_string()])
    );
}

#[test]
fn rebuild_is_idempotent() {
    let f = fixture();
    let doc = Rc::new(SessionDocument::new());
    f.context.open(doc.clone());
    doc.set_selection(true);

    f.model.rebuild();
    let first = f.model.current_tree();
    f.model.rebuild();
    let second = f.model.current_tree();

    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn unregistered_actions_are_omitted_everywhere() {
    let mut actions = InMemoryActionRegistry::builtin();
    let removed = ["print", "cut", "note-c", "voice-x12", "reset-workspace", "about"];
    for code in removed {
        assert!(actions.unregister(code).is_some(), "{code} should be in the catalogue");
    }

    let f = fixture_with(actions, InMemoryWorkspaces::default());
    let doc = Rc::new(SessionDocument::new());
    f.context.open(doc.clone());
    doc.set_selection(true);

    let tree = f.model.current_tree();
    let present = tree.actions();
    for code in removed {
        assert!(
            present.iter().all(|a| a.code != code),
            "{code} still present in the tree"
        );
    }
    assert!(tree.find("copy").is_some());
}

#[test]
fn every_registered_layout_code_appears() {
    let workspaces = InMemoryWorkspaces::new(
        vec![WorkspaceDescriptor::new("Basic", "Basic")],
        Some("Basic".to_string()),
    );
    let f = fixture_with(InMemoryActionRegistry::builtin(), workspaces);
    let tree = f.model.current_tree();

    for code in layout_codes() {
        if code == "check-update" {
            assert!(tree.find(code).is_none());
            continue;
        }
        assert!(tree.find(code).is_some(), "{code} missing from menu");
    }
}

#[test]
fn invoke_does_not_validate() {
    let f = fixture();
    f.model.invoke("file-save");
    f.model.invoke("made-up-code");

    let codes = f
        .dispatcher
        .take()
        .into_iter()
        .map(|d| d.code)
        .collect::<Vec<_>>();
    assert_eq!(codes, vec!["file-save", "made-up-code"]);
}

#[test]
fn help_stays_reachable_without_a_document() {
    let f = fixture();
    let tree = f.model.current_tree();

    let help = tree.submenu(&["Help"]).expect("help menu");
    assert!(help.is_enabled());
    for code in ["online-handbook", "about", "report-bug", "revert-factory"] {
        assert!(enabled(&tree, code), "{code} should be enabled");
    }
    assert!(tree.submenu(&["Help", "Tours"]).is_some_and(MenuEntry::is_enabled));
}

#[test]
fn separators_keep_their_positions_when_every_action_is_unregistered() {
    let f = fixture_with(InMemoryActionRegistry::new(), InMemoryWorkspaces::default());
    let tree = f.model.current_tree();

    assert!(tree.actions().is_empty());
    assert_eq!(top_level_titles(&tree), TOP_LEVEL);

    let file = tree.submenu(&["File"]).expect("file menu");
    assert_eq!(file.children(), vec![MenuEntry::Separator; 5].as_slice());
}
