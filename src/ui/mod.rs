//! UI utilities for terminal output
//!
//! This module provides the progress spinner shown while a request is in
//! flight.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
