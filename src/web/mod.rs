//! HTTP front end for the cross engine.
//!
//! Exposes a single endpoint, `POST /generate_children`, which accepts
//!
//! ```json
//! { "parents": [["m", "Aa", "Bb", "Cc"], ["f", "aa", "bb", "cc"]],
//!   "targets": [["m", "Aa", "bb", "Cc"]] }
//! ```
//!
//! and answers with one result per unordered pair of parents.
//!
//! ## Usage
//!
//! ```no_run
//! use punnett::web::run_server;
//!
//! #[tokio::main]
//! async fn main() {
//!     run_server("127.0.0.1:5000".parse().unwrap()).await.unwrap();
//! }
//! ```

mod routes;
mod server;

pub use routes::{router, GenerateRequest, GenerateResponse};
pub use server::run_server;
