pub mod errors;
pub mod html;

pub use errors::ResultResp;
pub use html::html_response;
