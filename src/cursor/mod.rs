//! Opaque cursor codec
//!
//! A cursor encodes exactly one [`Position`], the page coordinate of a
//! single item in the underlying source. The encode/decode pair is the
//! single seam for cursor format evolution: callers never construct or
//! interpret cursor internals directly.

mod codec;

pub use codec::{decode, encode, Position};

#[cfg(test)]
mod tests;
