pub mod state;
pub mod view_model;
