//! HTTP transport for the `Issues` API.
mod endpoint;
mod transport;


pub use endpoint::{EndpointConfig, ROUTE_PREFIX};
pub use transport::{HttpTransport, Transport};
