//! Application-Layer: Registry, Controller, Events und verzögerte Aufgaben.

pub mod controller;
pub mod error;
pub mod events;
pub mod registry;
pub mod scheduler;

pub use controller::EditorController;
pub use error::EditorError;
pub use events::EditorEvent;
pub use registry::{EditRequest, EditorRegistry};
pub use scheduler::{DeferredQueue, DeferredTask};

#[cfg(test)]
mod tests;
