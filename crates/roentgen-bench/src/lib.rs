//! Benchmark crate for Roentgen. See `benches/` for the criterion
//! harnesses; there is no library code here.

#![forbid(unsafe_code)]
