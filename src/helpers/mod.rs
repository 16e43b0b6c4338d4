//! Small presentation helpers

pub mod date;
pub mod html;
