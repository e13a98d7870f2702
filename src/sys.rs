//! The platform's signal-raising facility, behind one narrow boundary.

#![allow(unsafe_code)]

use crate::SignalNumber;
use core::ffi::c_int;

// POSIX defines `raise(sig)` as `pthread_kill(pthread_self(), sig)`, so delivery targets
// exactly the calling thread even in a multi-threaded process.  `pthread_kill()` reports its
// error directly in the return value and leaves `errno` alone; that raw convention is kept
// here, and the callers choose how to surface it.
#[rustfmt::skip]
cfg_if::cfg_if! {
    if #[cfg(any(
        all(target_os = "linux", any(target_env = "gnu", target_env = "musl")),
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "illumos",
        target_os = "macos",
    ))] {
        /// Returns `0` on success, or the error number describing the failure.
        pub(crate) fn raise_to_caller(signum: SignalNumber) -> c_int {
            // SAFETY: `pthread_self()` is always the valid ID of the calling thread, and
            // `pthread_kill()` checks `signum` itself and reports `EINVAL` if it's invalid.
            unsafe { libc::pthread_kill(libc::pthread_self(), signum) }
        }
    }
    // Unsupported
    else {
        core::compile_error!("Platform not supported yet. You may add support.");
    }
}
