//! Shared wire contracts between the storefront frontend and the product API.
//!
//! The API itself is an external service; this crate types only the client
//! side of its request/response shapes.

pub mod catalog;
pub mod quote;
