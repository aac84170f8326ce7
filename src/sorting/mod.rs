//! Ordering helpers shared by every index.

pub mod natural;

pub use natural::natural_cmp;
