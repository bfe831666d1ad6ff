//! Integration test harness for the RentHub HTTP API.
//!
//! These tests drive the full router against a real PostgreSQL database
//! (`TEST_DATABASE_URL`, defaulting to a local `renthub_test` database).

mod helpers;

mod auth_test;
mod favorite_test;
mod lease_test;
mod maintenance_test;
mod permission_test;
mod review_test;
mod room_test;
