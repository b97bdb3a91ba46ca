//! Authentication and session subsystem of the school-management portal:
//! credential storage, bcrypt password verification, JWT access tokens,
//! rotate-on-use refresh tokens, and role-gated request middleware.

pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod events;
pub mod handler;
pub mod middleware;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
