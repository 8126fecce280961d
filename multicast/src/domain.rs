use shared::{Error, Result};
use shared_http::api::{AvailableNodesResponse, GroupRequest, NodeId};
use strum_macros::Display;

/// Fixed banner texts shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notice {
    #[strum(to_string = "INVALID ARGUMENTS!")]
    InvalidArguments,
    #[strum(to_string = "No response from controller.")]
    NoResponse,
    #[strum(to_string = "No Multicast groups to show!")]
    NoGroups,
}

/// Nodes the controller allows in a group, both lists ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableNodes {
    pub sources: Vec<NodeId>,
    pub destinations: Vec<NodeId>,
}

impl AvailableNodes {
    pub fn new(sources: Vec<NodeId>, destinations: Vec<NodeId>) -> Self {
        Self {
            sources: sorted_unique(sources),
            destinations: sorted_unique(destinations),
        }
    }
}

impl From<AvailableNodesResponse> for AvailableNodes {
    fn from(response: AvailableNodesResponse) -> Self {
        Self::new(response.available_src, response.available_dst)
    }
}

fn sorted_unique(mut nodes: Vec<NodeId>) -> Vec<NodeId> {
    nodes.sort_unstable();
    nodes.dedup();
    nodes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputKind {
    Radio,
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeOption {
    pub value: NodeId,
    pub checked: bool,
}

/// A block of labeled inputs, one per node, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionContainer {
    pub id: String,
    pub kind: InputKind,
    pub options: Vec<NodeOption>,
}

impl OptionContainer {
    /// Radio inputs for `values`, none selected.
    pub fn radio(id: impl Into<String>, values: &[NodeId]) -> Self {
        Self {
            id: id.into(),
            kind: InputKind::Radio,
            options: values
                .iter()
                .map(|&value| NodeOption {
                    value,
                    checked: false,
                })
                .collect(),
        }
    }

    /// Checkbox inputs for `values`; an option is checked iff it appears in `chosen`.
    pub fn checkbox(id: impl Into<String>, values: &[NodeId], chosen: &[NodeId]) -> Self {
        Self {
            id: id.into(),
            kind: InputKind::Checkbox,
            options: values
                .iter()
                .map(|&value| NodeOption {
                    value,
                    checked: chosen.contains(&value),
                })
                .collect(),
        }
    }

    /// DOM id of the input for `value`. Unique across containers.
    pub fn input_id(&self, value: NodeId) -> String {
        format!("{}-{}", self.id, value)
    }

    pub fn values(&self) -> Vec<NodeId> {
        self.options.iter().map(|o| o.value).collect()
    }

    pub fn checked_values(&self) -> Vec<NodeId> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value)
            .collect()
    }

    /// Selection after the operator clicks `value`, in container order.
    ///
    /// A radio click replaces the selection; a checkbox click toggles membership.
    pub fn toggled(&self, current: &[NodeId], value: NodeId) -> Vec<NodeId> {
        match self.kind {
            InputKind::Radio => vec![value],
            InputKind::Checkbox => {
                let selected = !current.contains(&value);
                self.options
                    .iter()
                    .map(|o| o.value)
                    .filter(|&v| if v == value { selected } else { current.contains(&v) })
                    .collect()
            }
        }
    }
}

/// What the operator had selected when a form was submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSelection {
    pub sources: Vec<NodeId>,
    pub destinations: Vec<NodeId>,
}

impl FormSelection {
    pub fn new(sources: Vec<NodeId>, destinations: Vec<NodeId>) -> Self {
        Self {
            sources,
            destinations,
        }
    }

    /// Add form: exactly one source and at least one destination.
    pub fn into_add_request(self) -> Result<GroupRequest> {
        let src = match self.sources.as_slice() {
            [src] => *src,
            _ => {
                return Err(Error::InvalidArguments {
                    reason: "exactly one source must be selected",
                });
            }
        };
        Self::require_destinations(&self.destinations)?;
        Ok(GroupRequest::new(src, self.destinations))
    }

    /// Modify form: the source is fixed by the form, only destinations are checked.
    pub fn into_mod_request(self, src: NodeId) -> Result<GroupRequest> {
        Self::require_destinations(&self.destinations)?;
        Ok(GroupRequest::new(src, self.destinations))
    }

    fn require_destinations(destinations: &[NodeId]) -> Result<()> {
        if destinations.is_empty() {
            return Err(Error::InvalidArguments {
                reason: "at least one destination must be selected",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_nodes_sorted_numerically() {
        let nodes = AvailableNodes::from(AvailableNodesResponse {
            available_src: vec![10, 9, 2],
            available_dst: vec![100, 20, 3, 20],
        });
        assert_eq!(nodes.sources, vec![2, 9, 10]);
        assert_eq!(nodes.destinations, vec![3, 20, 100]);
    }

    #[test]
    fn test_radio_options_unchecked_in_order() {
        let container = OptionContainer::radio("radio-container", &[1, 5, 9]);
        assert_eq!(container.kind, InputKind::Radio);
        assert_eq!(container.values(), vec![1, 5, 9]);
        assert!(container.checked_values().is_empty());
    }

    #[test]
    fn test_checkbox_preselection() {
        let container = OptionContainer::checkbox("checkbox-container-1", &[2, 3, 4], &[3, 2]);
        assert_eq!(container.checked_values(), vec![2, 3]);
        assert!(!container.options[2].checked);
    }

    #[test]
    fn test_checkbox_ignores_unknown_chosen() {
        let container = OptionContainer::checkbox("c", &[2, 3], &[7]);
        assert!(container.checked_values().is_empty());
        assert_eq!(container.options.len(), 2);
    }

    #[test]
    fn test_input_ids_unique_per_container() {
        let a = OptionContainer::checkbox("checkbox-container-1", &[2], &[]);
        let b = OptionContainer::checkbox("checkbox-container-5", &[2], &[]);
        assert_eq!(a.input_id(2), "checkbox-container-1-2");
        assert_ne!(a.input_id(2), b.input_id(2));
    }

    #[test]
    fn test_toggled_keeps_container_order() {
        let container = OptionContainer::checkbox("c", &[2, 3, 4], &[]);
        assert_eq!(container.toggled(&[4], 2), vec![2, 4]);
        assert_eq!(container.toggled(&[2, 4], 4), vec![2]);
        assert_eq!(container.toggled(&[], 3), vec![3]);
    }

    #[test]
    fn test_radio_toggle_replaces() {
        let container = OptionContainer::radio("r", &[1, 5, 9]);
        assert_eq!(container.toggled(&[1], 9), vec![9]);
    }

    #[test]
    fn test_input_kind_attribute() {
        assert_eq!(InputKind::Radio.to_string(), "radio");
        assert_eq!(InputKind::Checkbox.to_string(), "checkbox");
    }

    #[test]
    fn test_add_request_requires_one_source() {
        assert!(FormSelection::new(vec![], vec![2]).into_add_request().is_err());
        assert!(
            FormSelection::new(vec![1, 5], vec![2])
                .into_add_request()
                .is_err()
        );
        assert_eq!(
            FormSelection::new(vec![1], vec![2, 3]).into_add_request(),
            Ok(GroupRequest::new(1, vec![2, 3]))
        );
    }

    #[test]
    fn test_requests_require_destinations() {
        assert!(matches!(
            FormSelection::new(vec![1], vec![]).into_add_request(),
            Err(Error::InvalidArguments { .. })
        ));
        assert!(matches!(
            FormSelection::default().into_mod_request(5),
            Err(Error::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_mod_request_ignores_selected_sources() {
        let request = FormSelection::new(vec![9, 9], vec![4])
            .into_mod_request(5)
            .unwrap();
        assert_eq!(request, GroupRequest::new(5, vec![4]));
    }

    #[test]
    fn test_notice_texts() {
        assert_eq!(Notice::InvalidArguments.to_string(), "INVALID ARGUMENTS!");
        assert_eq!(Notice::NoResponse.to_string(), "No response from controller.");
        assert_eq!(Notice::NoGroups.to_string(), "No Multicast groups to show!");
    }
}
