//! Reqwest-backed [`UserApi`] adapter.
//!
//! Owns transport details only: URL building, request timeout, status
//! checking and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use super::{NewUser, User, UserApi, UserId};
use crate::error::{ApiError, ApiResult};

/// Talks to `{base}/users` over HTTP.
#[derive(Clone, Debug)]
pub struct HttpUserApi {
    client: Client,
    users_url: String,
}

impl HttpUserApi {
    /// Build an adapter for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] when `base_url` is not an absolute
    /// http(s) URL, or a transport error when the client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|err| ApiError::invalid_base_url(base_url, err.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::invalid_base_url(
                base_url,
                "scheme must be http or https",
            ));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::from)?;
        let users_url = format!("{}/users", base.as_str().trim_end_matches('/'));
        Ok(Self { client, users_url })
    }

    /// The collection URL, `{base}/users`.
    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.users_url)
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let response = self.client.get(&self.users_url).send().await?;
        let users = ensure_success(response)?.json::<Vec<User>>().await?;
        Ok(users)
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        let response = self
            .client
            .post(&self.users_url)
            .json(user)
            .send()
            .await?;
        let created = ensure_success(response)?.json::<User>().await?;
        Ok(created)
    }

    async fn update_user(&self, user: &User) -> ApiResult<()> {
        let response = self
            .client
            .put(self.user_url(user.id))
            .json(user)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> ApiResult<()> {
        let response = self.client.delete(self.user_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}
