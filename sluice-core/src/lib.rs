//! Sluice Core
//!
//! Core types and abstractions for the Sluice pipeline reconciler.
//!
//! This crate contains:
//! - Domain types: Core business entities (desired specs, tracked state,
//!   remote pipeline and connector resources)
//! - DTOs: Request shapes for the control-plane HTTP API

pub mod domain;
pub mod dto;
