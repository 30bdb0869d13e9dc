// src/core/indexing/mod.rs

pub mod ann;
