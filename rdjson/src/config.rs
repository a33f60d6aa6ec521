// SPDX-License-Identifier: Apache-2.0

//! Compile-time parser configuration.

/// Configuration consumed by [`Parser`](crate::Parser).
///
/// Implement this on a unit struct to tune limits without runtime cost.
///
/// ```
/// use rdjson::{Parser, ParserConfig};
///
/// struct Shallow;
///
/// impl ParserConfig for Shallow {
///     const MAX_DEPTH: usize = 2;
///     const REJECT_NUMBER_OVERFLOW: bool = false;
///     const SCRATCH_INITIAL_CAPACITY: usize = 64;
/// }
///
/// let mut parser = Parser::<Shallow>::with_config();
/// assert!(parser.parse(b"[[1]]").is_ok());
/// assert!(parser.parse(b"[[[1]]]").is_err());
/// ```
pub trait ParserConfig {
    /// Maximum nesting of arrays and objects.
    const MAX_DEPTH: usize;
    /// Report [`ParseError::NumberTooBig`](crate::ParseError::NumberTooBig)
    /// instead of storing an infinity for out-of-range number literals.
    const REJECT_NUMBER_OVERFLOW: bool;
    /// Capacity of the scratch stacks on first use.
    const SCRATCH_INITIAL_CAPACITY: usize;
}

/// Default configuration: out-of-range numbers clamp to infinity.
pub struct DefaultConfig;

impl ParserConfig for DefaultConfig {
    const MAX_DEPTH: usize = 512;
    const REJECT_NUMBER_OVERFLOW: bool = false;
    const SCRATCH_INITIAL_CAPACITY: usize = 256;
}

/// Same limits as [`DefaultConfig`], but out-of-range numbers are rejected.
pub struct StrictConfig;

impl ParserConfig for StrictConfig {
    const MAX_DEPTH: usize = DefaultConfig::MAX_DEPTH;
    const REJECT_NUMBER_OVERFLOW: bool = true;
    const SCRATCH_INITIAL_CAPACITY: usize = DefaultConfig::SCRATCH_INITIAL_CAPACITY;
}
