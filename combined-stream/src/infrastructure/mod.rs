//! Infrastructure layer - ecosystem I/O trait implementations.
//!
//! The combined streams implement the `embedded_io` (and, with `async`,
//! `embedded_io_async`) traits so they can be handed to anything consuming
//! those, and with `std` they also implement `std::io::{Read, Seek, Write}`.

mod embedded_io_impl;

#[cfg(feature = "std")]
mod std_io_impl;
