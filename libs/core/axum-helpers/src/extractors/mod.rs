//! Request extractors that hand "missing" input to the service layer as
//! `None` instead of rejecting it, so the service decides what is invalid.

pub mod id_query;
pub mod optional_json;

pub use id_query::IdQuery;
pub use optional_json::OptionalJson;
