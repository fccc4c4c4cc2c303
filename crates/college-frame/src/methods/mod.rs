//! Query implementations for [`crate::DerivedFrame`]

mod report;
mod scatter;

pub use report::render_report;
