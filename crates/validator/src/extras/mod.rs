mod length;
mod presence;
mod url;

pub use length::validate_length;
pub use presence::is_blank;
pub use url::validate_url;
