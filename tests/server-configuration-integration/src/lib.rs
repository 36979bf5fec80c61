//! Integration test host crate for server configuration resolution
