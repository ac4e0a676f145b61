//! Core UI building blocks.
//!
//! - [`actions`] - what components ask the application to do
//! - [`component`] - the trait every widget implements
//! - [`event_handler`] - terminal input and ticks
//! - [`task_manager`] - background work reporting back over a channel
//!
//! Components turn key events into [`Action`]s. Actions flow through every
//! component's `update` before the app shell applies them to its state, so
//! a component can consume an action, rewrite it, or pass it on.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager, TaskResult};
