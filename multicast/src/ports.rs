use async_trait::async_trait;
use shared::Result;
use shared_http::api::{AvailableNodesResponse, GroupMap, GroupRequest};

// Ports are the seams between the view logic and whatever talks to the controller

/// Port for the SDN controller's multicast endpoints.
///
/// Browser HTTP futures are not `Send`, so neither are these.
#[async_trait(?Send)]
pub trait GroupController {
    /// `GET /currentgroups`
    async fn current_groups(&self) -> Result<GroupMap>;
    /// `GET /availablenodes`
    async fn available_nodes(&self) -> Result<AvailableNodesResponse>;
    /// `POST /groupadd`, returns the controller's message verbatim.
    async fn add_group(&self, request: &GroupRequest) -> Result<String>;
    /// `POST /groupmod`, returns the controller's message verbatim.
    async fn modify_group(&self, request: &GroupRequest) -> Result<String>;
}
