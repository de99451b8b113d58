/// Field values, request options and the flattened form body
pub mod form;
/// Dispatch primitive: pacing, logging and the HTTP round trip
pub mod http;
/// Typed options for each API operation
pub mod requests;
/// Response wrapper
pub mod responses;
/// Required-field and email-format checks
pub mod validation;
