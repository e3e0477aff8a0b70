pub mod employee;
pub mod view;
