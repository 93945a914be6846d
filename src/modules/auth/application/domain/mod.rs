pub mod entities;
pub mod permission;
