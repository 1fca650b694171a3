//! Blasdiff Core -- differential fuzz harness for BLAS level-1 routines.
//!
//! This crate carves an opaque fuzz-engine byte buffer into routine
//! parameters, runs the same logical call against two independently built
//! implementation families under panic isolation, and panics with a
//! reproducible diagnostic the moment the two families disagree on any
//! observable outcome. The routines themselves live in separate crates;
//! this crate only defines the contract they must satisfy.
//!
//! # Pipeline
//!
//! One fuzz iteration flows through five stages:
//!
//! 1. **Decode** -- [`decode`] interprets buffer prefixes as typed values
//!    (little-endian integers, IEEE-754 doubles, flag bytes).
//! 2. **Assemble** -- [`params`] composes decode steps into the full
//!    parameter set for one entry-point family, rejecting the iteration on
//!    the first truncated field.
//! 3. **Invoke** -- [`driver`] clones every operand buffer per family and
//!    calls both families through [`isolate::run_captured`], which converts
//!    a panic inside the routine into a comparable [`isolate::Fault`].
//! 4. **Compare** -- [`oracle`] asserts fault, buffer, and return-value
//!    equivalence, with absolute/relative tolerance for floating-point
//!    scalars and an explicit NaN-equals-NaN rule.
//! 5. **Report** -- [`entry`] maps the iteration to a
//!    [`entry::FuzzStatus`] for the external engine; a divergence panics
//!    out of the whole pipeline and is surfaced as a crash finding.
//!
//! # Key types
//!
//! - [`level1::Level1`] -- the ten-routine contract both implementation
//!   families satisfy, with shared contract-violation messages so equal
//!   violations produce equal fault payloads.
//! - [`params::MixedParams`] -- the decoded parameter set of the combined
//!   entry point (vectors, inert matrix scaffolding, scalar bank, flag
//!   byte, auxiliary integer).
//! - [`isolate::Fault`] -- a captured panic payload, `Eq` across families.

pub mod decode;
pub mod driver;
pub mod entry;
pub mod isolate;
pub mod level1;
pub mod oracle;
pub mod params;
