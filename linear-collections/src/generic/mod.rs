//! Generic linear containers and the trait they share.

pub mod array_list;
pub mod linked_list;
pub mod sequence;
