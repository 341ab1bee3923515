//! Integration test modules.

mod migration_test;
mod panel_flow_test;
mod persistence_test;
