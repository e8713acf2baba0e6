use std::fmt;

use serde::{Deserialize, Serialize};

/// Compute device the backbone runs on.
///
/// Decided once at load time and stored in the engine state; inference code
/// never re-probes hardware. The accelerator handle is assumed to be safely
/// shared or externally serialized by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cpu,
    Cuda,
}

impl Device {
    /// Build-time capability report, recorded once per load. Reports the
    /// accelerator when the crate was compiled with the `cuda` feature,
    /// general-purpose CPU otherwise. This is not a hardware probe: a
    /// `cuda` build on a GPU-less host still reports `Cuda`.
    pub fn detect() -> Self {
        if cfg!(feature = "cuda") {
            Device::Cuda
        } else {
            Device::Cpu
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda => write!(f, "cuda"),
        }
    }
}
