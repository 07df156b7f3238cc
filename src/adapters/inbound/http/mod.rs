//! HTTP inbound adapter: the status endpoint and the browser dashboard

mod dashboard;
mod health;
mod router;
mod server;
mod status;

pub use router::{router, AppState};
pub use server::serve;
