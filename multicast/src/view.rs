use crate::domain::{AvailableNodes, FormSelection, Notice, OptionContainer};
use crate::ports::GroupController;
use shared::{Error, Result};
use shared_http::api::{GroupMap, NodeId};
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Delay between a successful submit and the reload of the whole view.
pub const RELOAD_DELAY: Duration = Duration::from_secs(1);
/// How long a notification stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// `delay` in whole milliseconds for browser timers, saturating at `u32::MAX`.
pub fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

pub const ADD_FORM_ID: &str = "group-add-form";
pub const ADD_RADIO_CONTAINER_ID: &str = "radio-container";
pub const ADD_CHECKBOX_CONTAINER_ID: &str = "checkbox-container";

/// The "add group" form: pick one source, any number of destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddGroupForm {
    pub form_id: String,
    pub sources: OptionContainer,
    pub destinations: OptionContainer,
}

impl AddGroupForm {
    pub fn new(available: &AvailableNodes) -> Self {
        Self {
            form_id: ADD_FORM_ID.to_string(),
            sources: OptionContainer::radio(ADD_RADIO_CONTAINER_ID, &available.sources),
            destinations: OptionContainer::checkbox(
                ADD_CHECKBOX_CONTAINER_ID,
                &available.destinations,
                &[],
            ),
        }
    }
}

/// One tab per source node, holding that source's "modify group" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTab {
    pub source: NodeId,
    pub form_id: String,
    pub destinations: OptionContainer,
}

impl GroupTab {
    pub fn new(source: NodeId, available: &AvailableNodes, current: &[NodeId]) -> Self {
        Self {
            source,
            form_id: format!("group-mod-form-{source}"),
            destinations: OptionContainer::checkbox(
                format!("checkbox-container-{source}"),
                &available.destinations,
                current,
            ),
        }
    }

    pub fn label(&self) -> String {
        self.source.to_string()
    }

    /// Destinations the form starts with, also what "Clear" returns to.
    pub fn initial_selection(&self) -> Vec<NodeId> {
        self.destinations.checked_values()
    }
}

/// How far the tab region got during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupTabs {
    /// `/currentgroups` failed; nothing to show.
    Unavailable,
    /// Group list arrived but `/availablenodes` did not; headers only.
    Skeleton(Vec<NodeId>),
    Populated(Vec<GroupTab>),
}

impl GroupTabs {
    pub fn sources(&self) -> Vec<NodeId> {
        match self {
            GroupTabs::Unavailable => Vec::new(),
            GroupTabs::Skeleton(sources) => sources.clone(),
            GroupTabs::Populated(tabs) => tabs.iter().map(|t| t.source).collect(),
        }
    }

    /// True when the controller reported no groups, whatever else failed.
    pub fn is_empty(&self) -> bool {
        match self {
            GroupTabs::Unavailable => false,
            GroupTabs::Skeleton(sources) => sources.is_empty(),
            GroupTabs::Populated(tabs) => tabs.is_empty(),
        }
    }

    pub fn tab(&self, source: NodeId) -> Option<&GroupTab> {
        match self {
            GroupTabs::Populated(tabs) => tabs.iter().find(|t| t.source == source),
            _ => None,
        }
    }
}

/// Everything one load produced. Regions whose fetch failed stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub add_form: Option<AddGroupForm>,
    pub tabs: GroupTabs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Selection failed validation, nothing was sent.
    Rejected(Error),
    /// Controller answered with a 2xx; carries its message.
    Accepted(String),
    /// Controller unreachable or answered with an error status.
    Failed(Error),
}

impl SubmitOutcome {
    /// Banner text for the operator.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Rejected(_) => Notice::InvalidArguments.to_string(),
            SubmitOutcome::Accepted(message) => message.clone(),
            SubmitOutcome::Failed(_) => Notice::NoResponse.to_string(),
        }
    }

    pub fn reloads(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// How long to wait before reloading, `None` when the view stays as it is.
    pub fn reload_after(&self) -> Option<Duration> {
        self.reloads().then_some(RELOAD_DELAY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Rendering,
    Idle,
    Submitting,
}

impl ViewPhase {
    pub fn after(outcome: &SubmitOutcome) -> ViewPhase {
        if outcome.reloads() {
            ViewPhase::Rendering
        } else {
            ViewPhase::Idle
        }
    }

    pub fn accepts_submit(self) -> bool {
        self == ViewPhase::Idle
    }
}

#[derive(Clone)]
pub struct MulticastGroupView {
    controller: Rc<dyn GroupController>,
}

impl MulticastGroupView {
    pub fn new(controller: Rc<dyn GroupController>) -> Self {
        Self { controller }
    }

    /// Full render: the add form and the tab region load side by side.
    pub async fn load(&self) -> ViewSnapshot {
        let (add_form, tabs) = futures::join!(self.load_add_form(), self.load_group_tabs());
        let add_form = add_form
            .inspect_err(|e| log_fetch_failure("add form", e))
            .ok();
        ViewSnapshot { add_form, tabs }
    }

    pub async fn load_add_form(&self) -> Result<AddGroupForm> {
        let available = self.fetch_available_nodes().await?;
        Ok(AddGroupForm::new(&available))
    }

    /// Group list first, then available nodes, then the per-source forms.
    pub async fn load_group_tabs(&self) -> GroupTabs {
        let (sources, groups) = match self.fetch_current_groups().await {
            Ok(fetched) => fetched,
            Err(e) => {
                log_fetch_failure("group tabs", &e);
                return GroupTabs::Unavailable;
            }
        };
        if groups.is_empty() {
            // nothing to populate, so the empty state does not wait on /availablenodes
            return GroupTabs::Populated(Vec::new());
        }
        debug!("Building {} group tab(s)", sources.len());

        let available = match self.fetch_available_nodes().await {
            Ok(available) => available,
            Err(e) => {
                log_fetch_failure("group tab content", &e);
                return GroupTabs::Skeleton(sources);
            }
        };

        GroupTabs::Populated(
            sources
                .into_iter()
                .map(|src| GroupTab::new(src, &available, groups.destinations(src)))
                .collect(),
        )
    }

    /// Sources in the controller's order, plus the full map.
    pub async fn fetch_current_groups(&self) -> Result<(Vec<NodeId>, GroupMap)> {
        let groups = self.controller.current_groups().await?;
        Ok((groups.sources(), groups))
    }

    pub async fn fetch_available_nodes(&self) -> Result<AvailableNodes> {
        self.controller
            .available_nodes()
            .await
            .map(AvailableNodes::from)
    }

    pub async fn submit_group_add(&self, selection: FormSelection) -> SubmitOutcome {
        let request = match selection.into_add_request() {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected group add: {}", e);
                return SubmitOutcome::Rejected(e);
            }
        };
        info!("Adding multicast group {} -> {:?}", request.src, request.dst);
        Self::outcome(self.controller.add_group(&request).await)
    }

    pub async fn submit_group_mod(&self, src: NodeId, destinations: Vec<NodeId>) -> SubmitOutcome {
        let request = match FormSelection::new(Vec::new(), destinations).into_mod_request(src) {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejected group update for {}: {}", src, e);
                return SubmitOutcome::Rejected(e);
            }
        };
        info!("Updating multicast group {} -> {:?}", request.src, request.dst);
        Self::outcome(self.controller.modify_group(&request).await)
    }

    fn outcome(reply: Result<String>) -> SubmitOutcome {
        match reply {
            Ok(message) => SubmitOutcome::Accepted(message),
            Err(e) => {
                warn!("No response from controller: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}

fn log_fetch_failure(region: &str, error: &Error) {
    if error.is_unreachable() {
        warn!("No response from server while loading {}: {}", region, error);
    } else {
        warn!("Unusable response while loading {}: {}", region, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared_http::api::{AvailableNodesResponse, GroupRequest};
    use std::cell::RefCell;

    struct FakeController {
        groups: Result<GroupMap>,
        available: Result<AvailableNodesResponse>,
        reply: Result<String>,
        posted: RefCell<Vec<(&'static str, GroupRequest)>>,
        fetched: RefCell<Vec<&'static str>>,
    }

    impl FakeController {
        fn new() -> Self {
            Self {
                groups: Ok(vec![(1, vec![2, 3]), (5, vec![2])].into_iter().collect()),
                available: Ok(AvailableNodesResponse {
                    available_src: vec![9, 1, 5],
                    available_dst: vec![4, 2, 3],
                }),
                reply: Ok("Group added".to_string()),
                posted: RefCell::new(Vec::new()),
                fetched: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl GroupController for FakeController {
        async fn current_groups(&self) -> Result<GroupMap> {
            self.fetched.borrow_mut().push("/currentgroups");
            self.groups.clone()
        }

        async fn available_nodes(&self) -> Result<AvailableNodesResponse> {
            self.fetched.borrow_mut().push("/availablenodes");
            self.available.clone()
        }

        async fn add_group(&self, request: &GroupRequest) -> Result<String> {
            self.posted.borrow_mut().push(("/groupadd", request.clone()));
            self.reply.clone()
        }

        async fn modify_group(&self, request: &GroupRequest) -> Result<String> {
            self.posted.borrow_mut().push(("/groupmod", request.clone()));
            self.reply.clone()
        }
    }

    fn view_over(controller: FakeController) -> (MulticastGroupView, Rc<FakeController>) {
        let controller = Rc::new(controller);
        (MulticastGroupView::new(controller.clone()), controller)
    }

    #[tokio::test]
    async fn test_load_renders_one_tab_per_source() {
        let (view, _) = view_over(FakeController::new());
        let snapshot = view.load().await;

        assert_eq!(snapshot.tabs.sources(), vec![1, 5]);

        let tab_1 = snapshot.tabs.tab(1).unwrap();
        assert_eq!(tab_1.label(), "1");
        assert_eq!(tab_1.form_id, "group-mod-form-1");
        assert_eq!(tab_1.destinations.id, "checkbox-container-1");
        assert_eq!(tab_1.destinations.values(), vec![2, 3, 4]);
        assert_eq!(tab_1.initial_selection(), vec![2, 3]);

        let tab_5 = snapshot.tabs.tab(5).unwrap();
        assert_eq!(tab_5.destinations.values(), vec![2, 3, 4]);
        assert_eq!(tab_5.initial_selection(), vec![2]);
    }

    #[tokio::test]
    async fn test_load_builds_add_form_from_sorted_nodes() {
        let (view, _) = view_over(FakeController::new());
        let form = view.load().await.add_form.unwrap();

        assert_eq!(form.form_id, "group-add-form");
        assert_eq!(form.sources.id, "radio-container");
        assert_eq!(form.sources.values(), vec![1, 5, 9]);
        assert_eq!(form.destinations.values(), vec![2, 3, 4]);
        assert!(form.destinations.checked_values().is_empty());
    }

    #[tokio::test]
    async fn test_tabs_follow_controller_order() {
        let mut controller = FakeController::new();
        controller.groups = Ok(vec![(9, vec![]), (1, vec![4]), (5, vec![])]
            .into_iter()
            .collect());
        let (view, _) = view_over(controller);

        assert_eq!(view.load_group_tabs().await.sources(), vec![9, 1, 5]);
    }

    #[tokio::test]
    async fn test_group_list_fetched_before_available_nodes() {
        let (view, controller) = view_over(FakeController::new());
        view.load_group_tabs().await;

        assert_eq!(
            *controller.fetched.borrow(),
            vec!["/currentgroups", "/availablenodes"]
        );
    }

    #[tokio::test]
    async fn test_empty_group_map_yields_no_tabs() {
        let mut controller = FakeController::new();
        controller.groups = Ok(GroupMap::new());
        let (view, _) = view_over(controller);

        assert_eq!(view.load_group_tabs().await, GroupTabs::Populated(vec![]));
    }

    #[tokio::test]
    async fn test_group_fetch_failure_leaves_tabs_unavailable() {
        let mut controller = FakeController::new();
        controller.groups = Err(Error::Transport("connection refused".into()));
        let (view, controller) = view_over(controller);

        let snapshot = view.load().await;
        assert_eq!(snapshot.tabs, GroupTabs::Unavailable);
        // the add form has its own fetch
        assert!(snapshot.add_form.is_some());
        assert!(controller.posted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_available_nodes_failure_leaves_skeleton() {
        let mut controller = FakeController::new();
        controller.available = Err(Error::Status(500));
        let (view, _) = view_over(controller);

        let snapshot = view.load().await;
        assert_eq!(snapshot.tabs, GroupTabs::Skeleton(vec![1, 5]));
        assert!(snapshot.add_form.is_none());
    }

    #[tokio::test]
    async fn test_reload_takes_fresh_snapshot() {
        let (view, controller) = view_over(FakeController::new());
        view.load().await;
        view.load().await;

        let fetched = controller.fetched.borrow();
        assert_eq!(fetched.iter().filter(|p| **p == "/currentgroups").count(), 2);
        assert_eq!(fetched.iter().filter(|p| **p == "/availablenodes").count(), 4);
    }

    #[tokio::test]
    async fn test_invalid_add_selection_sends_nothing() {
        let (view, controller) = view_over(FakeController::new());

        for selection in [
            FormSelection::new(vec![], vec![2]),
            FormSelection::new(vec![1, 5], vec![2]),
            FormSelection::new(vec![1], vec![]),
        ] {
            let outcome = view.submit_group_add(selection).await;
            assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
            assert_eq!(outcome.message(), "INVALID ARGUMENTS!");
            assert!(!outcome.reloads());
        }
        assert!(controller.posted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_valid_add_posts_request_and_reloads() {
        let (view, controller) = view_over(FakeController::new());

        let outcome = view
            .submit_group_add(FormSelection::new(vec![9], vec![2, 4]))
            .await;

        assert_eq!(outcome, SubmitOutcome::Accepted("Group added".to_string()));
        assert_eq!(outcome.message(), "Group added");
        assert!(outcome.reloads());
        assert_eq!(
            *controller.posted.borrow(),
            vec![("/groupadd", GroupRequest::new(9, vec![2, 4]))]
        );
    }

    #[tokio::test]
    async fn test_mod_requires_destinations() {
        let (view, controller) = view_over(FakeController::new());

        let outcome = view.submit_group_mod(5, vec![]).await;
        assert_eq!(outcome.message(), "INVALID ARGUMENTS!");
        assert!(controller.posted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_mod_posts_fixed_source() {
        let (view, controller) = view_over(FakeController::new());

        let outcome = view.submit_group_mod(5, vec![2, 3]).await;
        assert!(outcome.reloads());
        assert_eq!(
            *controller.posted.borrow(),
            vec![("/groupmod", GroupRequest::new(5, vec![2, 3]))]
        );
    }

    #[tokio::test]
    async fn test_controller_failure_does_not_reload() {
        let mut controller = FakeController::new();
        controller.reply = Err(Error::Status(503));
        let (view, _) = view_over(controller);

        let outcome = view.submit_group_mod(1, vec![2]).await;
        assert_eq!(outcome, SubmitOutcome::Failed(Error::Status(503)));
        assert_eq!(outcome.message(), "No response from controller.");
        assert!(!outcome.reloads());
    }

    #[tokio::test]
    async fn test_any_success_text_reloads() {
        let mut controller = FakeController::new();
        controller.reply = Ok("error: group already exists".to_string());
        let (view, _) = view_over(controller);

        let outcome = view
            .submit_group_add(FormSelection::new(vec![1], vec![2]))
            .await;
        assert!(outcome.reloads());
        assert_eq!(outcome.message(), "error: group already exists");
    }

    #[tokio::test]
    async fn test_empty_group_map_skips_available_nodes() {
        let mut controller = FakeController::new();
        controller.groups = Ok(GroupMap::new());
        controller.available = Err(Error::Status(500));
        let (view, controller) = view_over(controller);

        let tabs = view.load_group_tabs().await;
        assert_eq!(tabs, GroupTabs::Populated(vec![]));
        assert!(tabs.is_empty());
        assert_eq!(*controller.fetched.borrow(), vec!["/currentgroups"]);
    }

    #[test]
    fn test_tabs_emptiness() {
        assert!(GroupTabs::Skeleton(vec![]).is_empty());
        assert!(GroupTabs::Populated(vec![]).is_empty());
        assert!(!GroupTabs::Skeleton(vec![1]).is_empty());
        assert!(!GroupTabs::Unavailable.is_empty());
    }

    #[test]
    fn test_reload_follows_success_after_one_second() {
        assert_eq!(RELOAD_DELAY, Duration::from_secs(1));
        assert_eq!(
            SubmitOutcome::Accepted("ok".to_string()).reload_after(),
            Some(Duration::from_secs(1))
        );
        assert_eq!(
            SubmitOutcome::Failed(Error::Transport("reset".into())).reload_after(),
            None
        );
        assert_eq!(
            SubmitOutcome::Rejected(Error::InvalidArguments { reason: "none" }).reload_after(),
            None
        );
    }

    #[test]
    fn test_timer_millis() {
        assert_eq!(timer_millis(RELOAD_DELAY), 1000);
        assert_eq!(timer_millis(NOTICE_DURATION), 3000);
        assert_eq!(timer_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }

    #[test]
    fn test_phase_after_submit() {
        assert_eq!(
            ViewPhase::after(&SubmitOutcome::Accepted(String::new())),
            ViewPhase::Rendering
        );
        assert_eq!(
            ViewPhase::after(&SubmitOutcome::Failed(Error::Status(500))),
            ViewPhase::Idle
        );
        assert!(ViewPhase::Idle.accepts_submit());
        assert!(!ViewPhase::Submitting.accepts_submit());
        assert!(!ViewPhase::Rendering.accepts_submit());
    }
}
