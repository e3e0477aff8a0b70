use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::view::{EmployeePage, PageQuery};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("invalid page query: page={page}, page_size={page_size}")]
    InvalidQuery { page: u32, page_size: u32 },
}

impl FetchError {
    pub fn check_query(query: PageQuery) -> Result<(), FetchError> {
        if query.page == 0 || query.page_size == 0 {
            return Err(FetchError::InvalidQuery {
                page: query.page,
                page_size: query.page_size,
            });
        }
        Ok(())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_page(&self, query: PageQuery) -> Result<EmployeePage, FetchError>;
}
