//! Integration tests for pixtone crates.
//!
//! End-to-end checks that run filters through the public entry points and
//! verify the properties hosts rely on: identities at neutral settings,
//! untouched alpha, safe handling of tiny images and bad input, and a
//! serializable adjustment stack.
