//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the physics core:
//! - Math types and operations
//! - Handle-addressed collections
//! - Frame timing
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
