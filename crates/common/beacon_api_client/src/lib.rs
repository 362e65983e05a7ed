//! Typed bindings for the beacon node REST query endpoints.
//!
//! Every endpoint function issues a single GET through an [`ApiClient`], decodes the `data`
//! field of the response into a caller supplied destination and reports whether the resource
//! exists:
//!
//! - `Ok(true)`: the resource was found and the destination has been overwritten.
//! - `Ok(false)`: the node answered 404, the destination is untouched.
//! - `Err(_)`: the request failed, the destination must not be relied upon.

pub mod beacon;
pub mod builder;
pub mod context;
pub mod error;
pub mod http_client;
pub mod query;
pub mod request;

pub use context::RequestContext;
pub use error::{Error, ErrorKind};
pub use http_client::{ApiClient, ApiRequest, ApiResponse, ClientWithBaseUrl};
pub use query::Query;
