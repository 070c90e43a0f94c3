//! Drive mount integration
//!
//! `DriveMounter` drives any `MountHost`; `ColabHost` is the host used inside
//! Google Colab.

pub mod colab;
pub mod mounter;

pub use colab::{COLAB_MARKER_VAR, ColabHost};
pub use mounter::DriveMounter;
