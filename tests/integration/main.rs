//! HTTP-level integration tests, run against in-memory stores.

mod auth_test;
mod folder_test;
mod helpers;
mod note_test;
