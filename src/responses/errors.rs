use crate::errors::ServerError;
use astra::Response;

/// Return type of every route handler.
pub type ResultResp = Result<Response, ServerError>;
