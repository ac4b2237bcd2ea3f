// ============================================================================
// CAR CACHE - Last fetched listing, page lifetime only
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Car;

/// Shared handle on the last successfully fetched car list.
///
/// Clones share the same list. Filters and searches read a snapshot;
/// only the fetch path writes.
#[derive(Clone, Default)]
pub struct CarCache {
    cars: Rc<RefCell<Vec<Car>>>,
}

impl CarCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite with a fresh listing (last writer wins)
    pub fn replace(&self, cars: Vec<Car>) {
        *self.cars.borrow_mut() = cars;
    }

    pub fn snapshot(&self) -> Vec<Car> {
        self.cars.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.cars.borrow().len()
    }

    pub fn find(&self, id: i64) -> Option<Car> {
        self.cars.borrow().iter().find(|car| car.id == id).cloned()
    }
}
