/// Numeric conversion and division helpers.
///
/// This module provides the checked integer-to-float conversion used wherever
/// an `int` is promoted, and the floor-modulo operations whose result follows
/// the sign of the divisor.
pub mod num;
