// ABOUTME: Configuration module for swing-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

/// Engine configuration (smoothing, history, phase thresholds, metrics, trends)
pub mod engine;

pub use engine::EngineConfig;
