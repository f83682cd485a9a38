//! Agent Intake - Guided Setup Interview Engine
//!
//! This crate implements the deterministic question-and-answer flow used to
//! configure a voice/chat assistant for a business, producing one summary
//! for the external profile generation step.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
