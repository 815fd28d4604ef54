//! # logdeck
//!
//! Leptos + WASM front-end for a log monitoring backend. Polls the log
//! snapshot endpoint on a fixed cadence, renders a severity-filterable
//! table, and hosts a floating assistant chat widget backed by the
//! backend's analysis endpoint.
//!
//! This crate contains the application shell, components, per-widget state,
//! and the REST/polling layer. The backend itself is an external service
//! reachable through exactly two endpoints (`GET /logs`, `POST /chat`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;
