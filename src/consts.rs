//! Global constants for the application.

pub const HTTP_PORT: u16 = 8080; // Default port for the HTTP server.
