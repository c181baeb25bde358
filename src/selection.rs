use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::constants::SHOW_ALL_INDEX;

type SelectionCallback = Box<dyn Fn(usize)>;

struct State {
    selected: Cell<usize>,
    callbacks: RefCell<Vec<SelectionCallback>>,
}

pub struct WeakCategorySelector {
    state: Weak<State>,
}

impl WeakCategorySelector {
    #[must_use]
    pub fn upgrade(&self) -> Option<CategorySelector> {
        self.state.upgrade().map(|state| CategorySelector { state })
    }
}

/// Mutable pointer to the currently active category filter. Starts at the
/// reserved "show all" index. Single-owner state shared through cheap
/// handles; callbacks observe changes.
#[derive(Clone)]
pub struct CategorySelector {
    state: Rc<State>,
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorySelector {
    #[must_use]
    pub fn new() -> Self {
        let state = State {
            selected: Cell::new(SHOW_ALL_INDEX),
            callbacks: RefCell::new(Vec::new()),
        };
        Self { state: Rc::new(state) }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.state.selected.get()
    }

    /// Re-selecting the active category resets to "show all" (toggle-off);
    /// anything else becomes the active filter. Never rejected: an index
    /// that names no category is accepted and simply filters everything out.
    /// Callbacks fire only when the value actually changes.
    pub fn select(&self, index: usize) {
        let current = self.state.selected.get();
        let next = if index == current { SHOW_ALL_INDEX } else { index };
        if next == current {
            return;
        }

        self.state.selected.set(next);
        for callback in self.state.callbacks.borrow().iter() {
            callback(next);
        }
    }

    pub fn connect_selection_changed(&self, callback: impl Fn(usize) + 'static) {
        self.state.callbacks.borrow_mut().push(Box::new(callback));
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakCategorySelector {
        WeakCategorySelector {
            state: Rc::downgrade(&self.state),
        }
    }
}
