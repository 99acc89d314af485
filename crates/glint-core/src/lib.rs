//! Glint Core Types and Definitions
//!
//! This crate provides the foundational types for the Glint bubble-field
//! layout engine. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::ItemId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, and the bounded layout field ([`geometry`] module)
//! - **Items**: The semantic item model with sizes and trends ([`item`] module)

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod item;
