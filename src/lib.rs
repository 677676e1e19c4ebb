//! Clinic mortality explorer for the historical handwashing dataset.
//!
//! The `data` module holds the whole pipeline (load → filter → pivot →
//! metrics); `ui` and `app` only draw its results.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
