//! HTTP front for the color analysis service.
//!
//! # Endpoints
//!
//! - `GET  /api/health`      — Liveness probe
//! - `GET  /api/test-mode`   — List available canned response kinds
//! - `POST /api/test-upload` — Serve a canned analysis, no provider call
//! - `POST /api/analyze`     — Upload a photo, analyze, normalize

pub mod routes;

pub use routes::app_router;
