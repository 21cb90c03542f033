//! Behavioral tests for the page helpers
//!
//! BDD-style tests using given-when-then naming. Each test drives the
//! helpers through the in-memory seams and checks observable behavior.
