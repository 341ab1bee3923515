//! Unit test modules.

mod adjust_test;
mod profiles_test;
mod store_test;
