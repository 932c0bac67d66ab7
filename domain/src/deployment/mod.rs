//! The deployment configuration record and its build variants.

pub mod entities;
pub mod value_objects;
