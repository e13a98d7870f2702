//! A minimal walkthrough of both raising surfaces.

#![allow(
    clippy::print_stdout,
    unused_crate_dependencies // Ignore the lib crate's deps that are supplied here also.
)]

use signal_raise::{raise, raw};


fn main() {
    // Ignored unless this process is stopped, so nothing observable happens.
    println!("raise(SIGCONT) -> {:?}", raise(libc::SIGCONT));

    // Zero only has the validity checking performed; nothing is delivered.
    println!("raise(0) -> {:?}", raise(0));

    // Refused, with the error in-band.
    println!("raise(-1) -> {:?}", raise(-1));

    // The C convention reports through `errno` instead.
    let r = raw::raise(-1);
    println!("raw::raise(-1) -> {r} (errno: {})", errno::errno());
}
