//! SEO metadata, schema.org structured data and editorial scoring for the
//! Aviators Training Centre blog.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;

pub use aviators_seo_types as types;
