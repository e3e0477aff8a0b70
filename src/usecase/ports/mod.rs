pub mod employee_source;
