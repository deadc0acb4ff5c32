//! Page components, one per routed path.
//!
//! The auth pages (login, register, password recovery) drive the auth
//! state transitions around the REST calls. The workspace pages are thin
//! mounting targets for the route table.

pub mod actions;
pub mod assistant;
pub mod dashboard;
pub mod documents;
pub mod forgot_password;
pub mod integrations;
pub mod knowledge_base;
pub mod login;
pub mod my_twgs;
pub mod notifications;
pub mod pipeline;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod schedule;
pub mod twgs;
pub mod workspace;
