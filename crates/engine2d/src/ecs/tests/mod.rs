//! Entity container tests
