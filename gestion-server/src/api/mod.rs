//! API route modules
//!
//! # Structure
//!
//! - [`empleados`] — employee records (list/create/update/deactivate)
//! - [`cargos`] — job positions (list/create/update/deactivate)
//! - [`health`] — health check, public route

pub mod cargos;
pub mod empleados;
pub mod health;
