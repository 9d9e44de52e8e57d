//! Tests for the density plot model
//!
//! Tests are organized by topic:
//! - `density` - Closed-form agreement and degenerate parameters
//! - `controls` - Slider ranges, stepping and reset
//! - `plot` - Initialization, in-place updates and purity of `update`
//! - `config` - Configuration defaults and validation
