mod adduct;
pub mod catalog;
mod compound;
pub mod errors;
mod modification;
