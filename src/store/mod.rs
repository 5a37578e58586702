//! Remote record store integration: typed REST client, record models,
//! client-side aggregation, and the fetch manager feeding the event loop.

pub mod aggregate;
pub mod client;
pub mod manager;
pub mod records;
