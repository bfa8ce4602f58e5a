/// Runtime value representation.
///
/// Defines the `Value` enum and its conversions, truthiness and printing
/// rules.
pub mod core;
