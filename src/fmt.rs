//! Logging shims for library code.
//!
//! On the ARM target these forward to `defmt`. On the host (unit tests, the
//! simulator) they expand to nothing, so no global logger has to be linked.
#![macro_use]
#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(target_arch = "arm")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(target_arch = "arm"))]
            let _ = ($( & $x ),*);
        }
    };
}
