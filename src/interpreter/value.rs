/// Runtime value representation.
///
/// Defines the `Value` enum that every expression evaluates to and every
/// variable stores, together with conversion, defaulting and serialization
/// helpers.
pub mod core;
/// Value kinds.
///
/// Defines `ValueKind`, the tag of a `Value` without its payload, used to
/// describe types in diagnostics and to drive assignment coercion.
pub mod kind;
