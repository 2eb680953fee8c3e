mod health;
mod index;
mod url;

pub use health::health_handler;
pub use index::index_handler;
pub use url::{create_url_handler, get_url_handler, redirect_handler};
