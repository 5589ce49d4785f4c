//! Main module for the application backend.
//! Contains the route handlers and the router.
pub mod handlers_task;
pub mod handlers_user;
pub mod router;
