/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *  
 */
use std::fmt;
use std::sync::Arc;

use tracing::{debug, enabled, error, info, trace, warn, Level};

use crate::level::LogLevel;

/// A structured field: key and displayable value.
pub type Field<'a> = (&'a str, &'a dyn fmt::Display);

/// Leveled structured logger that [`TraceLogger`](crate::TraceLogger) writes to.
///
/// The backend owns verbosity: `level` reports the minimum level it currently
/// records, and the adapter skips work for entries the backend would drop.
pub trait LogBackend {
    /// Effective minimum level, or `None` when all output is off.
    fn level(&self) -> Option<LogLevel>;

    /// Record one entry.
    fn log(&self, level: LogLevel, message: &str, fields: &[Field<'_>]);

    fn enabled(&self, level: LogLevel) -> bool {
        self.level().map_or(false, |min| min.should_log(level))
    }
}

impl<B: LogBackend + ?Sized> LogBackend for &B {
    fn level(&self) -> Option<LogLevel> {
        (**self).level()
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[Field<'_>]) {
        (**self).log(level, message, fields)
    }
}

impl<B: LogBackend + ?Sized> LogBackend for Arc<B> {
    fn level(&self) -> Option<LogLevel> {
        (**self).level()
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[Field<'_>]) {
        (**self).log(level, message, fields)
    }
}

/// Renders fields as ` key=value` pairs appended to the message.
struct FieldList<'a, 'b>(&'a [Field<'b>]);

impl fmt::Display for FieldList<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.0 {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Emits through the `tracing` dispatcher active on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    pub const TARGET: &'static str = "akita::sql";

    pub fn new() -> Self {
        TracingBackend
    }
}

impl LogBackend for TracingBackend {
    /// Lowest level the current subscriber records for [`TracingBackend::TARGET`],
    /// so per-target directives such as `warn,akita::sql=info` are honoured.
    fn level(&self) -> Option<LogLevel> {
        if enabled!(target: TracingBackend::TARGET, Level::TRACE) {
            Some(LogLevel::Trace)
        } else if enabled!(target: TracingBackend::TARGET, Level::DEBUG) {
            Some(LogLevel::Debug)
        } else if enabled!(target: TracingBackend::TARGET, Level::INFO) {
            Some(LogLevel::Info)
        } else if enabled!(target: TracingBackend::TARGET, Level::WARN) {
            Some(LogLevel::Warn)
        } else if enabled!(target: TracingBackend::TARGET, Level::ERROR) {
            Some(LogLevel::Error)
        } else {
            None
        }
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[Field<'_>]) {
        let fields = FieldList(fields);
        match level {
            LogLevel::Error => error!(target: TracingBackend::TARGET, "{}{}", message, fields),
            LogLevel::Warn => warn!(target: TracingBackend::TARGET, "{}{}", message, fields),
            LogLevel::Info => info!(target: TracingBackend::TARGET, "{}{}", message, fields),
            LogLevel::Debug => debug!(target: TracingBackend::TARGET, "{}{}", message, fields),
            LogLevel::Trace => trace!(target: TracingBackend::TARGET, "{}{}", message, fields),
        }
    }
}
