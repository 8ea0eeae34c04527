/// Integer arithmetic helpers.
///
/// This module provides checked integer routines the standard library does
/// not offer on stable, such as floor division. All functions return `None`
/// instead of panicking when the result is not representable.
pub mod num;
