use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::notify::Notification;

/// The document currently open in the editor, as far as the menu cares.
pub trait Document {
    /// True when the document has unsaved modifications.
    fn needs_save(&self) -> bool;
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    fn selection_is_empty(&self) -> bool;
    fn is_note_input_mode(&self) -> bool;
    fn content_changed(&self) -> &Notification;
    fn selection_changed(&self) -> &Notification;
}

pub trait DocumentContext {
    fn current_document(&self) -> Option<Rc<dyn Document>>;
    fn document_switched(&self) -> &Notification;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDescriptor {
    pub name: String,
    pub title: String,
}

impl WorkspaceDescriptor {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

pub trait WorkspaceRegistry {
    /// Known workspaces, in no particular order.
    fn list_workspaces(&self) -> Result<Vec<WorkspaceDescriptor>>;
    fn current_workspace(&self) -> Option<WorkspaceDescriptor>;
}

/// Plain in-memory document whose setters fire the matching notification.
#[derive(Debug, Default)]
pub struct SessionDocument {
    needs_save: Cell<bool>,
    can_undo: Cell<bool>,
    can_redo: Cell<bool>,
    has_selection: Cell<bool>,
    note_input: Cell<bool>,
    content_changed: Notification,
    selection_changed: Notification,
}

impl SessionDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_modified(&self, modified: bool) {
        self.needs_save.set(modified);
        self.content_changed.notify();
    }

    pub fn set_undo_state(&self, can_undo: bool, can_redo: bool) {
        self.can_undo.set(can_undo);
        self.can_redo.set(can_redo);
        self.content_changed.notify();
    }

    pub fn set_selection(&self, has_selection: bool) {
        self.has_selection.set(has_selection);
        self.selection_changed.notify();
    }

    pub fn set_note_input(&self, active: bool) {
        self.note_input.set(active);
        self.selection_changed.notify();
    }
}

impl Document for SessionDocument {
    fn needs_save(&self) -> bool {
        self.needs_save.get()
    }

    fn can_undo(&self) -> bool {
        self.can_undo.get()
    }

    fn can_redo(&self) -> bool {
        self.can_redo.get()
    }

    fn selection_is_empty(&self) -> bool {
        !self.has_selection.get()
    }

    fn is_note_input_mode(&self) -> bool {
        self.note_input.get()
    }

    fn content_changed(&self) -> &Notification {
        &self.content_changed
    }

    fn selection_changed(&self) -> &Notification {
        &self.selection_changed
    }
}

#[derive(Default)]
pub struct SessionContext {
    current: RefCell<Option<Rc<dyn Document>>>,
    switched: Notification,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, document: Rc<dyn Document>) {
        *self.current.borrow_mut() = Some(document);
        self.switched.notify();
    }

    pub fn close(&self) {
        if self.current.borrow_mut().take().is_some() {
            self.switched.notify();
        }
    }
}

impl DocumentContext for SessionContext {
    fn current_document(&self) -> Option<Rc<dyn Document>> {
        self.current.borrow().clone()
    }

    fn document_switched(&self) -> &Notification {
        &self.switched
    }
}

#[derive(Debug, Default)]
pub struct InMemoryWorkspaces {
    workspaces: RefCell<Vec<WorkspaceDescriptor>>,
    current: RefCell<Option<String>>,
}

impl InMemoryWorkspaces {
    pub fn new(workspaces: Vec<WorkspaceDescriptor>, current: Option<String>) -> Self {
        Self {
            workspaces: RefCell::new(workspaces),
            current: RefCell::new(current),
        }
    }

    pub fn set_current(&self, name: Option<&str>) {
        *self.current.borrow_mut() = name.map(str::to_string);
    }
}

impl WorkspaceRegistry for InMemoryWorkspaces {
    fn list_workspaces(&self) -> Result<Vec<WorkspaceDescriptor>> {
        Ok(self.workspaces.borrow().clone())
    }

    fn current_workspace(&self) -> Option<WorkspaceDescriptor> {
        let current = self.current.borrow();
        let name = current.as_deref()?;
        self.workspaces
            .borrow()
            .iter()
            .find(|w| w.name == name)
            .cloned()
    }
}
