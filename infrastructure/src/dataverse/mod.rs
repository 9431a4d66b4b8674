//! Dataverse adapters
//!
//! - [`StaticConnection`] — connection configured up front (URL + token)
//! - [`DataverseWebApiTransport`] — FetchXML queries and row updates over the Web API

mod connection;
mod web_api;

pub use connection::StaticConnection;
pub use web_api::DataverseWebApiTransport;
