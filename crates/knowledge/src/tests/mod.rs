//! Cross-module suites run against the built-in FAQ set.

mod properties;
