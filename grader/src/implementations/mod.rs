//! # Implementations
//!
//! Ready-made [`Implementation`](crate::traits::implementation::Implementation)s.
//!
//! - [`reference`]: The known-correct character counter used as ground truth.
//! - [`function`]: Adapts a plain function into an implementation, for harnesses that load
//!   candidate code as a callable.

pub mod function;
pub mod reference;
