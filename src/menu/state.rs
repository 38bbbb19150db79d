use crate::context::DocumentContext;

/// Predicates captured once at the start of a rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub document_open: bool,
    pub needs_save: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub has_selection: bool,
    pub note_input: bool,
}

impl MenuState {
    pub fn capture(context: &dyn DocumentContext) -> Self {
        let Some(document) = context.current_document() else {
            return Self::default();
        };

        Self {
            document_open: true,
            needs_save: document.needs_save(),
            can_undo: document.can_undo(),
            can_redo: document.can_redo(),
            has_selection: !document.selection_is_empty(),
            note_input: document.is_note_input_mode(),
        }
    }
}

/// Predicate deciding whether an entry is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    DocumentOpen,
    NeedsSave,
    CanUndo,
    CanRedo,
    HasSelection,
}

impl Gate {
    pub fn eval(self, state: &MenuState) -> bool {
        match self {
            Gate::Always => true,
            Gate::DocumentOpen => state.document_open,
            Gate::NeedsSave => state.needs_save,
            Gate::CanUndo => state.can_undo,
            Gate::CanRedo => state.can_redo,
            Gate::HasSelection => state.has_selection,
        }
    }
}

/// Persistent on/off state shown as a check mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    NoteInput,
}

impl Toggle {
    pub fn eval(self, state: &MenuState) -> bool {
        match self {
            Toggle::NoteInput => state.note_input,
        }
    }
}
