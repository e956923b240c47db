pub mod atomic_database;
mod count;
mod element;
mod element_counts;
pub mod errors;
mod offset_kind;
