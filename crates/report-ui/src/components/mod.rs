//! Reusable rendering components shared by the report views.

pub mod bars;
