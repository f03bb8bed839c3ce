#![no_std]

mod errors;
mod events;
mod registry;
mod types;

pub use errors::RegistryError;
pub use events::InstanceRegisteredEvent;
pub use registry::{Registry, RegistryClient};
