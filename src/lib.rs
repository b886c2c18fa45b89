// Copyright (c) 2021 akita contributors
//
// Licensed under the Apache License, Version 2.0
// <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0> or the MIT
// license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. All files in the project carrying such notice may not be copied,
// modified, or distributed except according to those terms.

//! This create offers:
//!
//! *   A SQL logger for the database layer that writes through an application-wide
//!     leveled logger (by default `tracing`);
//! *   Slow query detection, "record not found" suppression and optional ANSI colors.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! akita_logger = "0.6"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use akita_logger::*;
//!
//! let cfg = Config::default()
//!     .set_slow_threshold(Duration::from_millis(200))
//!     .set_ignore_record_not_found_error(true);
//! let logger = TraceLogger::new(Some(TracingBackend::new()), cfg);
//!
//! let begin = Instant::now();
//! // ... run the statement ...
//! logger.trace(begin, &mut || ("select * from t_system_user".to_string(), Some(3)), None);
//!
//! // The database layer reports a miss; it is not logged as an error.
//! logger.trace(begin, &mut || ("select * from t_system_user where id = 9".to_string(), Some(0)),
//!     Some(&LoggerError::RecordNotFound));
//!
//! logger.info("pool ready", &[("max_size", &16)]);
//! ```
//!
//! ## Levels
//!
//! The backend decides verbosity. Traces of failed statements are written when
//! the backend records errors, slow statements when it records warnings, and all
//! other statements only when the backend sits exactly at info.
//! [`SqlLogger::log_mode`] is accepted and ignored.
//!
mod backend;
mod config;
mod errors;
mod format;
mod level;
mod logger;

#[doc(inline)]
pub use backend::{Field, LogBackend, TracingBackend};
#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use errors::{is_record_not_found, LoggerError, Result};
pub use format::*;
#[doc(inline)]
pub use level::LogLevel;
#[doc(inline)]
pub use logger::{QueryProvider, SqlLogger, TraceLogger};
