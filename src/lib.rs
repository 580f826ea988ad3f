//! NoPickles Order Engine - Conversational Order Taking
//!
//! This crate implements the dialogue engine behind the NoPickles fast food
//! point of sale: per-session conversation state, extraction of menu items
//! from free text, and the order lifecycle from first message to completion.
//!
//! The HTTP layer, static file serving, and process bootstrap live outside
//! this crate and talk to it through [`application::OrderEngine`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
