//! Entity modules, one per resource collection
//!
//! Each entity follows the same split: `model` (struct + constructor),
//! `store` (SQL over the shared pool), `handlers` (axum handlers) and a
//! `routes()` function wiring the collection paths.

pub mod appointment;
pub mod client;
pub mod invoice;
pub mod service;
pub mod stylist;
