use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::actions::{ActionData, ActionDispatcher, ActionRegistry, ShortcutRegistry};
use crate::context::{DocumentContext, WorkspaceRegistry};
use crate::menu::item::{ActionEntry, MenuTree};
use crate::menu::layout::{MenuBuilder, MenuSettings};
use crate::menu::state::MenuState;
use crate::notify::{Notification, Subscription};

/// Collaborators the menu model queries and forwards to.
#[derive(Clone)]
pub struct MenuServices {
    pub actions: Rc<dyn ActionRegistry>,
    pub shortcuts: Rc<dyn ShortcutRegistry>,
    pub dispatcher: Rc<dyn ActionDispatcher>,
    pub context: Rc<dyn DocumentContext>,
    pub workspaces: Rc<dyn WorkspaceRegistry>,
    pub settings: MenuSettings,
}

/// Keeps the application menu in sync with the active document.
///
/// The tree starts empty; call [`MenuModel::rebuild`] once to populate it.
/// After that, switching documents or changing the active document's content
/// or selection rebuilds it automatically.
pub struct MenuModel {
    inner: Rc<Inner>,
}

struct Inner {
    services: MenuServices,
    tree: RefCell<Rc<MenuTree>>,
    tree_changed: Notification,
    rebuilding: Cell<bool>,
    pending: Cell<bool>,
    rebuilds: Cell<u64>,
    switch_subscription: RefCell<Option<Subscription>>,
    document_subscriptions: RefCell<Vec<Subscription>>,
}

impl MenuModel {
    pub fn new(services: MenuServices) -> Self {
        let inner = Rc::new(Inner {
            services,
            tree: RefCell::new(Rc::new(MenuTree::default())),
            tree_changed: Notification::new(),
            rebuilding: Cell::new(false),
            pending: Cell::new(false),
            rebuilds: Cell::new(0),
            switch_subscription: RefCell::new(None),
            document_subscriptions: RefCell::new(Vec::new()),
        });

        let weak = Rc::downgrade(&inner);
        let subscription = inner
            .services
            .context
            .document_switched()
            .subscribe(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.track_current_document();
                    inner.rebuild();
                }
            });
        *inner.switch_subscription.borrow_mut() = Some(subscription);
        inner.track_current_document();

        Self { inner }
    }

    pub fn rebuild(&self) {
        self.inner.rebuild();
    }

    pub fn current_tree(&self) -> Rc<MenuTree> {
        self.inner.tree.borrow().clone()
    }

    /// Fires after every rebuild, once the new tree is published.
    pub fn tree_changed(&self) -> &Notification {
        &self.inner.tree_changed
    }

    /// Number of rebuilds performed so far.
    pub fn rebuild_count(&self) -> u64 {
        self.inner.rebuilds.get()
    }

    pub fn invoke(&self, code: &str) {
        self.invoke_with(code, None);
    }

    pub fn invoke_with(&self, code: &str, data: Option<&ActionData>) {
        self.inner.services.dispatcher.dispatch(code, data);
    }

    /// Invokes an entry taken from the tree, passing back its argument data.
    pub fn invoke_entry(&self, entry: &ActionEntry) {
        self.invoke_with(&entry.code, entry.data.as_ref());
    }
}

impl Inner {
    fn rebuild(&self) {
        if self.rebuilding.replace(true) {
            // Requested from inside a rebuild; run again once this one finishes.
            self.pending.set(true);
            return;
        }

        loop {
            self.pending.set(false);

            let services = &self.services;
            let tree = MenuBuilder {
                actions: &*services.actions,
                shortcuts: &*services.shortcuts,
                workspaces: &*services.workspaces,
                settings: services.settings,
                state: MenuState::capture(&*services.context),
            }
            .build();

            *self.tree.borrow_mut() = Rc::new(tree);
            self.rebuilds.set(self.rebuilds.get() + 1);

            if !self.pending.get() {
                break;
            }
        }

        self.rebuilding.set(false);
        tracing::debug!(rebuilds = self.rebuilds.get(), "menu rebuilt");
        self.tree_changed.notify();
    }

    /// Moves the content and selection subscriptions to the active document.
    fn track_current_document(self: &Rc<Self>) {
        let mut subscriptions = Vec::new();

        if let Some(document) = self.services.context.current_document() {
            subscriptions.push(document.content_changed().subscribe(self.rebuild_callback()));
            subscriptions.push(document.selection_changed().subscribe(self.rebuild_callback()));
        }

        let previous = self.document_subscriptions.replace(subscriptions);
        drop(previous);
    }

    fn rebuild_callback(self: &Rc<Self>) -> impl Fn() + 'static {
        let weak: Weak<Self> = Rc::downgrade(self);
        move || {
            if let Some(inner) = weak.upgrade() {
                inner.rebuild();
            }
        }
    }
}
