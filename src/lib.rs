// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Movies Gateway Contributors

//! Movies Gateway - Backend-for-Frontend for the Movies Platform API
//!
//! This crate terminates user authentication (Basic sign-in plus Google and
//! Facebook federated login), binds the upstream-issued session token to an
//! HTTP-only cookie, and proxies authorized requests to the upstream movies
//! API with the token translated into a bearer header.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - credential extraction, federated login, cookie binding
//! - `upstream` - movies API client (reqwest)
//! - `config` - environment-derived configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod upstream;
