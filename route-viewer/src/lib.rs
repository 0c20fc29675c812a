//! Train route viewer.
//!
//! Presents the candidate routes found by a route search service: a ranked
//! list of summary cards, a detail view laying the chosen route out as a
//! timeline with transfer markers, and station-name autocomplete for the
//! search form.

pub mod autocomplete;
pub mod backend;
pub mod config;
pub mod domain;
pub mod selection;
pub mod timeline;
pub mod view;
pub mod web;
