use std::sync::{Arc, Mutex};

use portkit::prelude::*;

/// Recording UnaryOutputPort for testing that captures every outcome it is
/// handed, in call order.
pub struct RecordingOutputPort<T> {
    pub received: Arc<Mutex<Vec<Outcome<T>>>>,
}

impl<T> RecordingOutputPort<T> {
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<Outcome<T>>
    where
        T: Clone,
    {
        self.received.lock().unwrap().clone()
    }
}

impl<T: Send> UnaryOutputPort<T> for RecordingOutputPort<T> {
    fn handle(&self, outcome: Outcome<T>) {
        self.received.lock().unwrap().push(outcome);
    }
}
