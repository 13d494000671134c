//! Inbound adapters translating external requests into controller calls.

pub mod http;
