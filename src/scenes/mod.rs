//! The scripted explainer scenes and the registry that names them.

pub mod agent;
pub mod neural;
pub mod palette;
pub mod registry;
