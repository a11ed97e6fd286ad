//! larderd library surface, exposed so integration tests can drive the
//! router without binding a socket.

pub mod config;
pub mod routes;
pub mod server;
