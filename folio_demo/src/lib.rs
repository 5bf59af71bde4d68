//! Fixtures shared by the unit tests across the workspace.

pub mod contact;
