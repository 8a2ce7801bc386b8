//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod display;
pub mod menus;
pub mod screenshot;
pub mod selection;
pub mod session;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_support;
