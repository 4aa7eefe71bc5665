//! Liveness tokens for async work started by a component.
//!
//! A task clones the token before suspending and checks it before touching
//! shared state. The effect that started the task revokes the token in its
//! destructor, so results for a torn-down view are dropped on the floor.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
