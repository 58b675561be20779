//! Abstraction over "somewhere page state lives".
//!
//! Page operations are written against [`StateCell`] so the same code runs
//! on a reactive `RwSignal` in the browser and on a plain `RefCell` in tests.

use leptos::prelude::*;
use std::cell::RefCell;

pub trait StateCell<T> {
    /// Mutate the state in place
    fn update_state(&self, f: impl FnOnce(&mut T));

    /// Read the state without subscribing to it
    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }

    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn update_state(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }

    fn with_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
