//! Utility modules for aiready

pub mod timing;

pub use timing::human_duration;
