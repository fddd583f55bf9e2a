//! Descriptor utility types.
//!
//! | Module  | Purpose                                  |
//! |---------|------------------------------------------|
//! | `error` | Error and diagnostics types, field paths |

mod error;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
