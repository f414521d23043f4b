//! Numeric kernel
//!
//! Pure, stateless helpers the pricing and strategy layers are built on:
//! normal distribution approximation, root finders, interpolation. Nothing
//! here throws; non-convergence surfaces as `Option`.

pub mod interp;
pub mod normal;
pub mod roots;

pub use interp::*;
pub use normal::*;
pub use roots::*;
