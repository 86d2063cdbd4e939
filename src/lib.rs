//! Clinic Console - Subscription core for a multi-tenant clinic platform
//!
//! This crate implements the subscription lifecycle and request-approval
//! workflow: clinics request extensions or plan changes, a platform operator
//! decides them, and approval drives the subscription mutation, the payment
//! ledger entry, and the outbound notifications.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
