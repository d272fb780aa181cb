pub mod disc;
pub mod entity;
pub mod label;
