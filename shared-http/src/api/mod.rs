pub mod requests;
pub mod responses;

pub use requests::GroupRequest;
pub use responses::{AvailableNodesResponse, GroupMap};

/// Identifier of a switch/host in the controller's topology.
pub type NodeId = u64;

/// Controller endpoint paths.
pub mod paths {
    pub const CURRENT_GROUPS: &str = "/currentgroups";
    pub const AVAILABLE_NODES: &str = "/availablenodes";
    pub const GROUP_ADD: &str = "/groupadd";
    pub const GROUP_MOD: &str = "/groupmod";
}
