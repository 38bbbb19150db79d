use std::{
    cell::RefCell,
    collections::HashMap,
};

use serde::{Deserialize, Serialize};

use crate::catalog;

pub type ActionCode = String;

/// Positional string arguments handed back to the dispatcher on invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionData(pub Vec<String>);

impl ActionData {
    pub fn arg(value: impl Into<String>) -> Self {
        Self(vec![value.into()])
    }

    pub fn args(&self) -> &[String] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub code: ActionCode,
    pub title: String,
    /// Argument shape the action expects when invoked without explicit data.
    pub data: Option<ActionData>,
}

impl ActionDescriptor {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            data: None,
        }
    }
}

pub trait ActionRegistry {
    fn resolve(&self, code: &str) -> Option<ActionDescriptor>;
}

pub trait ShortcutRegistry {
    /// Returns the key sequence bound to `code`, e.g. `Ctrl+S`.
    fn lookup(&self, code: &str) -> Option<String>;
}

pub trait ActionDispatcher {
    fn dispatch(&self, code: &str, data: Option<&ActionData>);
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryActionRegistry {
    actions: HashMap<ActionCode, ActionDescriptor>,
}

impl InMemoryActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with every action of the built-in catalogue.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (code, title) in catalog::ACTIONS {
            registry.register(ActionDescriptor::new(*code, *title));
        }
        registry
    }

    pub fn register(&mut self, action: ActionDescriptor) {
        self.actions.insert(action.code.clone(), action);
    }

    pub fn unregister(&mut self, code: &str) -> Option<ActionDescriptor> {
        self.actions.remove(code)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// All registered descriptors, sorted by code.
    pub fn descriptors(&self) -> Vec<&ActionDescriptor> {
        let mut out = self.actions.values().collect::<Vec<_>>();
        out.sort_by(|a, b| a.code.cmp(&b.code));
        out
    }
}

impl ActionRegistry for InMemoryActionRegistry {
    fn resolve(&self, code: &str) -> Option<ActionDescriptor> {
        self.actions.get(code).cloned()
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryShortcutRegistry {
    shortcuts: HashMap<ActionCode, String>,
}

impl InMemoryShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (code, sequence) in catalog::SHORTCUTS {
            registry.bind(*code, *sequence);
        }
        registry
    }

    /// Binds `sequence` to `code`; an empty sequence removes the binding.
    pub fn bind(&mut self, code: impl Into<String>, sequence: impl Into<String>) {
        let code = code.into();
        let sequence = sequence.into();
        if sequence.trim().is_empty() {
            self.shortcuts.remove(&code);
        } else {
            self.shortcuts.insert(code, sequence);
        }
    }
}

impl ShortcutRegistry for InMemoryShortcutRegistry {
    fn lookup(&self, code: &str) -> Option<String> {
        self.shortcuts.get(code).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub code: ActionCode,
    pub data: Option<ActionData>,
}

/// Dispatcher that logs and remembers every request instead of executing it.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    dispatched: RefCell<Vec<Dispatched>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatched(&self) -> Vec<Dispatched> {
        self.dispatched.borrow().clone()
    }

    pub fn take(&self) -> Vec<Dispatched> {
        self.dispatched.take()
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&self, code: &str, data: Option<&ActionData>) {
        tracing::info!(code, args = ?data.map(ActionData::args), "dispatch action");
        self.dispatched.borrow_mut().push(Dispatched {
            code: code.to_string(),
            data: data.cloned(),
        });
    }
}
