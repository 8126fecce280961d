use super::NodeId;
use serde::{Deserialize, Serialize};

/// Body of `POST /groupadd` and `POST /groupmod`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRequest {
    pub src: NodeId,
    pub dst: Vec<NodeId>,
}

impl GroupRequest {
    pub fn new(src: NodeId, dst: Vec<NodeId>) -> Self {
        Self { src, dst }
    }
}
