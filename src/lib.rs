//! Programming From Ground Up examples
//!
//! Re-exports the example crates so both can be used from one dependency.

pub use groundup_exit as exit;
pub use groundup_maximum as maximum;
