//! Core data models for the employee roster.

mod employee;
mod role;

pub use employee::{Employee, EmployeeKind, NewEmployee};
pub use role::Role;
