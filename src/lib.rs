//! Sommario turns an author-maintained section manifest into a navigable
//! table-of-contents fragment for long-form article pages.
//!
//! The pipeline is deliberately small: a manifest (TOML or JSON) is loaded
//! and resolved into a [`domain::outline::SectionEntry`] tree, flattened
//! into a stream of list events, and rendered through an askama template
//! into a `<nav>` fragment whose links target in-document anchors. The
//! host page owns those anchors; sommario never inspects or creates them.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
