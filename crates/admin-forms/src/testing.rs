//! Test doubles shared by the controller tests.

use std::cell::RefCell;

use crate::api::Navigator;

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: &str) {
        self.routes.borrow_mut().push(route.to_string());
    }
}
