//! CLI commands for rondo

pub mod close;
pub mod connected;
pub mod dispatch;
pub mod menu;
pub mod metric;
pub mod mst;
pub mod paths;
pub mod show;
pub mod tour;
