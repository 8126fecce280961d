pub mod group_tabs;
pub mod multicast_groups;
pub mod multicast_tables;

pub use multicast_groups::MulticastGroups;
pub use multicast_tables::MulticastTables;
