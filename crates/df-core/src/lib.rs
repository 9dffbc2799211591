//! Domain model and data-access capabilities for the dealflow workflow admin.
//!
//! Departments own pipelines, pipelines own ordered stages, and deals move
//! between stages. Agents, assets and customers hang off the same structure.
//! Storage is always in memory and reached through the [`repository`]
//! traits so that state containers never touch a module-level collection.

pub mod chat;
pub mod config;
pub mod customer;
pub mod entity;
pub mod integrity;
pub mod mock_data;
pub mod repository;
pub mod types;
