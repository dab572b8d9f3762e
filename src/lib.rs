//! Sizing and pricing of small data-center deployments: racks, UPS, cooling, PDU and batteries.
//!
//! Every computation here is pure and synchronous. The host owns the [`configuration::Configuration`]
//! and recomputes from scratch whenever it changes.

pub mod battery;
pub mod catalog;
pub mod configuration;
pub mod cooling;
pub mod error;
pub mod prelude;
pub mod quantity;
pub mod quote;
pub mod selector;
pub mod snapshot;
