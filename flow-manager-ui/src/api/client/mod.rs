use async_trait::async_trait;
use dioxus::prelude::{info, warn};
use multicast::GroupController;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::config::Config;
use shared::{Error, Result};
use shared_http::api::{AvailableNodesResponse, GroupMap, GroupRequest, paths};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl ApiClient {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        info!("Fetching {}", url);
        let response = self.client.get(&url).send().await.map_err(transport)?;
        let body = Self::successful(response)?
            .text()
            .await
            .map_err(transport)?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Could not decode response from {}: {}", url, e);
            Error::Decode(e.to_string())
        })
    }

    /// Posts `request` and hands back the response text untouched.
    async fn post_group(&self, path: &str, request: &GroupRequest) -> Result<String> {
        let url = self.config.endpoint(path);
        info!("Posting group {} to {}", request.src, url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        Self::successful(response)?.text().await.map_err(transport)
    }

    fn successful(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!("{} answered with {}", response.url(), status);
            Err(Error::Status(status.as_u16()))
        }
    }
}

fn transport(e: reqwest::Error) -> Error {
    warn!("Request to controller failed: {}", e);
    Error::Transport(e.to_string())
}

#[async_trait(?Send)]
impl GroupController for ApiClient {
    async fn current_groups(&self) -> Result<GroupMap> {
        self.get_json(paths::CURRENT_GROUPS).await
    }

    async fn available_nodes(&self) -> Result<AvailableNodesResponse> {
        self.get_json(paths::AVAILABLE_NODES).await
    }

    async fn add_group(&self, request: &GroupRequest) -> Result<String> {
        self.post_group(paths::GROUP_ADD, request).await
    }

    async fn modify_group(&self, request: &GroupRequest) -> Result<String> {
        self.post_group(paths::GROUP_MOD, request).await
    }
}
