//! Utility functions
//!
//! Pure utility functions for date display formatting. These helpers carry
//! no state and are safe to call from any rendering context.

pub mod date;
