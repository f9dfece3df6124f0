//! Rule set construction and regex compilation.
//!
//! The compiler turns settings plus discovered identifiers into an ordered rule
//! list, normalizes each pattern and compiles it, dropping invalid rules with a
//! warning instead of failing the run.

pub mod compiler;
