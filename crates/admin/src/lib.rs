//! Studio Pro dashboard library.
//!
//! The dashboard is a server-rendered admin app for a boutique fitness
//! studio: KPI overview, CRM directory with search, and marketing metrics,
//! all behind a mock single-admin login.
//!
//! This crate provides the dashboard as a library so that the binary, the
//! CLI and the integration tests share one router.
//!
//! # Modules
//!
//! - [`services::session`] - Session restore, login, logout and the access decision
//! - [`middleware`] - Session cookie layer and the auth gate
//! - [`routes`] - Pages and JSON API
//! - [`data`] - Sample data loading

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
