//! Application layer: the facade notebooks call into.

pub mod runtime;

pub use runtime::NotebookRuntime;
