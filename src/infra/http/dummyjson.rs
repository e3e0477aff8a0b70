use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::domain::entities::employee::Employee;
use crate::domain::entities::view::{EmployeePage, PageQuery};
use crate::usecase::ports::employee_source::{EmployeeSource, FetchError};

/// Wire shape of `GET /users`. `skip` and `limit` are echoed back but unused.
#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<Employee>,
    total: u64,
}

pub struct HttpEmployeeSource {
    client: HttpClient,
    base_url: String,
}

impl HttpEmployeeSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), base_url)
    }

    pub fn with_client(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EmployeeSource for HttpEmployeeSource {
    async fn fetch_page(&self, query: PageQuery) -> Result<EmployeePage, FetchError> {
        FetchError::check_query(query)?;
        let skip = query.skip();
        tracing::debug!(page = query.page, limit = query.page_size, skip, "GET users");

        let response = self
            .client
            .get(self.users_url())
            .query(&[("limit", u64::from(query.page_size)), ("skip", skip)])
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let body: UsersResponse =
            serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))?;

        Ok(EmployeePage {
            records: body.users,
            total: body.total,
        })
    }
}
