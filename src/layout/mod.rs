//! Layout: weighted stacking, the two-pass engine, hit testing.

pub mod engine;
pub mod stack;

pub use engine::LayoutEngine;
pub use hit_test::HitTester;
pub use stack::Axis;
