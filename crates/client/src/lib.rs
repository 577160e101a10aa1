pub mod api;
pub mod config;
pub mod error;
pub mod guards;
pub mod notify;
pub mod routes;
pub mod session;
pub mod storage;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod testing;

pub use api::{RequestOptions, SessionClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use guards::{check_role, require_auth};
pub use routes::*;
pub use session::KeyLayout;

#[cfg(feature = "wasm")]
mod start {
    use console_error_panic_hook::set_once as set_panic_hook;
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::utils::tracing::configure_tracing_once;

    /// Called once by each page before it touches the client
    #[wasm_bindgen]
    pub fn start_client() {
        set_panic_hook();
        configure_tracing_once();
    }
}
