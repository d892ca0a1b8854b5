//! HTTP server module for the dashboard.
//!
//! An axum router exposing the phase model and its companions as JSON, plus
//! the HTML page that polls it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and date selection                       │
//! │  - JSON serialization, HTML page                          │
//! │  - CORS, compression, tracing, error mapping              │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Phase cycle resolution (cached per winter year)        │
//! │  - Solstice counters, solar approximation                 │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Models (models/)                                         │
//! │  - Calendar arithmetic, solstice anchors, phase types     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
