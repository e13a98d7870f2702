#![doc = include_str!("../README.md")]
#![no_std]
#[cfg(not(target_family = "unix"))]
core::compile_error!("Only supported on POSIX.");


pub mod raw;
mod sys;

use core::ffi::c_int;
// This is re-exported because it's exposed in our public API.
#[doc(no_inline)]
pub use errno::Errno;


/// The type of a signal number as defined by C (C17 7.14).
pub type SignalNumber = c_int;


/// Deliver the given signal to the calling thread.
///
/// Like C's `raise()`.  If a handler is installed for `signum`, it runs in the calling thread
/// before this function returns.  Otherwise the signal's default disposition is applied
/// (ignore, stop, continue, or terminate), per the platform's delivery scheduling.
///
/// A `signum` of `0` only has the validity checking performed; no signal is delivered.
///
/// # Errors
/// If the platform refuses delivery.  Only possible with an invalid signal number, in which
/// case the value is `EINVAL`.  Never retried.
#[inline]
pub fn raise(signum: SignalNumber) -> Result<(), Errno> {
    let r = sys::raise_to_caller(signum);
    if r == 0 { Ok(()) } else { Err(Errno(r)) }
}
