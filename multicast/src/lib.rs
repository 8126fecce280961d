pub mod domain;
pub mod ports;
pub mod view;

pub use domain::{AvailableNodes, FormSelection, InputKind, NodeOption, Notice, OptionContainer};
pub use ports::GroupController;
pub use shared_http::api::{GroupMap, GroupRequest, NodeId};
pub use view::{
    AddGroupForm, GroupTab, GroupTabs, MulticastGroupView, NOTICE_DURATION, RELOAD_DELAY,
    SubmitOutcome, ViewPhase, ViewSnapshot, timer_millis,
};
