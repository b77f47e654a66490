use crate::Record;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Record lifecycle events, fired in a fixed order during `save()` and
/// `delete()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelEvent {
    Saving,
    Creating,
    Created,
    Updating,
    Updated,
    Saved,
    Deleting,
    Deleted,
}

impl ModelEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saving => "model-saving",
            Self::Creating => "model-creating",
            Self::Created => "model-created",
            Self::Updating => "model-updating",
            Self::Updated => "model-updated",
            Self::Saved => "model-saved",
            Self::Deleting => "model-deleting",
            Self::Deleted => "model-deleted",
        }
    }
}

type Listener = Arc<dyn Fn(&Record) + Send + Sync>;

/// Synchronous event dispatch: all listeners registered for an event run,
/// in registration order, before control returns to the caller.
#[derive(Default)]
pub struct Emitter {
    listeners: Mutex<HashMap<ModelEvent, Vec<Listener>>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, event: ModelEvent, listener: impl Fn(&Record) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap()
            .entry(event)
            .or_default()
            .push(Arc::new(listener));
    }

    /// Dispatch runs outside the registry lock, so a listener may call
    /// `on` to register further listeners. Listeners registered mid-fire
    /// are not invoked for the event currently dispatching.
    pub fn fire(&self, event: ModelEvent, record: &Record) {
        let listeners: Vec<Listener> = {
            let map = self.listeners.lock().unwrap();
            match map.get(&event) {
                Some(list) => list.clone(),
                None => return,
            }
        };

        for listener in &listeners {
            listener(record);
        }
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.lock().unwrap();
        let counts: HashMap<&'static str, usize> = listeners
            .iter()
            .map(|(event, list)| (event.as_str(), list.len()))
            .collect();
        f.debug_struct("Emitter").field("listeners", &counts).finish()
    }
}
