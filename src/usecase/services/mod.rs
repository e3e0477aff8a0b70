pub mod query_service;
pub mod row_transform;
pub mod view_reducer;
