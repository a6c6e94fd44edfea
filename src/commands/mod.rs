mod http;
mod sighup;

pub use http::http;
pub use sighup::sighup;
