//! # Architecture-Specific Capability Modules
//!
//! Re-exports the appropriate hardware implementation for the target
//! architecture; non-x86 targets fall back to the compile-anywhere stubs.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "x86_64")] {
        pub mod x86_64;

        /// The current architecture's implementation.
        pub use x86_64 as current;
    } else {
        /// The current architecture's implementation (stubbed).
        pub use crate::arch_stubs as current;
    }
}
