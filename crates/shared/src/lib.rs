//! Types shared between the posts client and its front ends: the stored
//! records, the request bodies sent to the API, and the API error model.

pub mod domain;
pub mod error;
pub mod protocol;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod lib_tests;
