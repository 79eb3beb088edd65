//! Constants for file extension handling.
//!
//! This module centralizes the default set of extensions scanned for debug
//! statements so the walker, the staged-file filter and the CLI defaults
//! stay consistent.

/// File extensions for JavaScript/TypeScript files that should be scanned
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
];
