use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::models::Catalog;

type PublishCallback = Box<dyn Fn(&Catalog)>;

struct State {
    catalog: RefCell<Rc<Catalog>>,
    published: Cell<bool>,
    callbacks: RefCell<Vec<PublishCallback>>,
}

pub struct WeakCatalogStore {
    state: Weak<State>,
}

impl WeakCatalogStore {
    #[must_use]
    pub fn upgrade(&self) -> Option<CatalogStore> {
        self.state.upgrade().map(|state| CatalogStore { state })
    }
}

/// Holds the decoded catalog. Empty until the one-shot publish at startup;
/// load-then-publish, so readers never observe a partial catalog. The first
/// publish wins and the content is read-only afterwards.
#[derive(Clone)]
pub struct CatalogStore {
    state: Rc<State>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        let state = State {
            catalog: RefCell::new(Rc::new(Catalog::default())),
            published: Cell::new(false),
            callbacks: RefCell::new(Vec::new()),
        };
        Self { state: Rc::new(state) }
    }

    /// Snapshot handle to the current catalog; the empty catalog until the
    /// loader publishes.
    #[must_use]
    pub fn catalog(&self) -> Rc<Catalog> {
        self.state.catalog.borrow().clone()
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.state.published.get()
    }

    /// Install the decoded catalog and notify subscribers. Later publishes
    /// are ignored; the one-shot load is idempotent and harmless to repeat,
    /// so a late duplicate is logged and dropped rather than treated as an
    /// error.
    pub fn publish(&self, catalog: Catalog) {
        if self.state.published.replace(true) {
            tracing::warn!("catalog already published, ignoring late publish");
            return;
        }

        let catalog = Rc::new(catalog);
        *self.state.catalog.borrow_mut() = Rc::clone(&catalog);
        for callback in self.state.callbacks.borrow().iter() {
            callback(&catalog);
        }
    }

    pub fn connect_published(&self, callback: impl Fn(&Catalog) + 'static) {
        self.state.callbacks.borrow_mut().push(Box::new(callback));
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakCatalogStore {
        WeakCatalogStore {
            state: Rc::downgrade(&self.state),
        }
    }
}
