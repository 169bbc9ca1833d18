//! Payroll Calculation Engine
//!
//! This crate resolves salary cycles into pay periods, counts working days,
//! prorates salaries for mid-cycle joiners and leavers, prices overtime, and
//! breaks an annual cost-to-company figure down into monthly earnings,
//! statutory deductions (PF, ESI, professional tax, progressive TDS) and net
//! pay. Every calculation is a pure function over explicit configuration.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
