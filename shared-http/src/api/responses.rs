use super::NodeId;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Response body of `GET /availablenodes`, exactly as the controller sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableNodesResponse {
    pub available_src: Vec<NodeId>,
    pub available_dst: Vec<NodeId>,
}

/// Response body of `GET /currentgroups`: source node -> destination nodes.
///
/// On the wire this is a JSON object whose keys are stringified node ids.
/// Entries keep the order in which the controller listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMap {
    entries: Vec<(NodeId, Vec<NodeId>)>,
}

impl GroupMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destinations of `src`. A source already present keeps its position.
    pub fn insert(&mut self, src: NodeId, dst: Vec<NodeId>) {
        match self.entries.iter_mut().find(|(s, _)| *s == src) {
            Some((_, existing)) => *existing = dst,
            None => self.entries.push((src, dst)),
        }
    }

    pub fn sources(&self) -> Vec<NodeId> {
        self.entries.iter().map(|(src, _)| *src).collect()
    }

    /// Destinations of `src`, empty when the source has no group.
    pub fn destinations(&self, src: NodeId) -> &[NodeId] {
        self.entries
            .iter()
            .find(|(s, _)| *s == src)
            .map(|(_, dst)| dst.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(NodeId, Vec<NodeId>)> for GroupMap {
    fn from_iter<T: IntoIterator<Item = (NodeId, Vec<NodeId>)>>(iter: T) -> Self {
        let mut map = GroupMap::new();
        for (src, dst) in iter {
            map.insert(src, dst);
        }
        map
    }
}

impl Serialize for GroupMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (src, dst) in &self.entries {
            map.serialize_entry(&src.to_string(), dst)?;
        }
        map.end()
    }
}

struct GroupMapVisitor;

impl<'de> Visitor<'de> for GroupMapVisitor {
    type Value = GroupMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping node ids to arrays of node ids")
    }

    fn visit_map<A>(self, mut access: A) -> Result<GroupMap, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = GroupMap {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((key, dst)) = access.next_entry::<String, Vec<NodeId>>()? {
            let src = key.trim().parse::<NodeId>().map_err(|_| {
                de::Error::invalid_value(de::Unexpected::Str(&key), &"a numeric node id")
            })?;
            map.insert(src, dst);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for GroupMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GroupMapVisitor)
    }
}
