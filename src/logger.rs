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
use std::error::Error;
use std::panic::Location;
use std::time::Instant;

use crate::backend::{Field, LogBackend};
use crate::config::Config;
use crate::errors::is_record_not_found;
use crate::format::{Palette, TraceLine};
use crate::level::LogLevel;

/// Deferred source of the executed SQL and its row count (`None` when unknown).
/// Only called when an entry is actually going to be written.
pub type QueryProvider<'a> = &'a mut dyn FnMut() -> (String, Option<u64>);

/// Logger contract the database layer calls into after each statement.
pub trait SqlLogger {
    /// Requested verbosity from the database layer. Implementations may ignore it.
    fn log_mode(&self, level: LogLevel) -> &dyn SqlLogger;

    fn info(&self, message: &str, fields: &[Field<'_>]);

    fn warn(&self, message: &str, fields: &[Field<'_>]);

    fn error(&self, message: &str, fields: &[Field<'_>]);

    /// Report a finished statement that started at `begin`. `err` is the
    /// statement's failure, if any.
    ///
    /// The logged location is the caller of `trace`. Database layers should mark
    /// their own query entry points `#[track_caller]` as well, so the location
    /// points at the application code issuing the query rather than the layer's
    /// internals.
    #[track_caller]
    fn trace(&self, begin: Instant, query: QueryProvider<'_>, err: Option<&(dyn Error + 'static)>);
}

/// [`SqlLogger`] that writes to a leveled [`LogBackend`].
///
/// Failed statements go out at error level, statements slower than
/// `Config::slow_threshold` at warn level, and everything else at info level
/// when the backend sits exactly at info. Without a backend every call is a no-op.
#[derive(Debug, Clone)]
pub struct TraceLogger<B> {
    backend: Option<B>,
    config: Config,
    palette: Palette,
}

impl<B: LogBackend> TraceLogger<B> {
    pub fn new(backend: Option<B>, config: Config) -> Self {
        let palette = Palette::new(config.colorful());
        Self { backend, config, palette }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    fn slow_label(&self) -> String {
        format!("SLOW SQL >= {:?}", self.config.slow_threshold())
    }
}

impl<B: LogBackend> SqlLogger for TraceLogger<B> {
    /// Returns `self` untouched. Verbosity belongs to the backend (for
    /// [`TracingBackend`](crate::TracingBackend), the installed subscriber's
    /// filter), so the database layer's own level setting is not applied.
    fn log_mode(&self, _level: LogLevel) -> &dyn SqlLogger {
        self
    }

    fn info(&self, message: &str, fields: &[Field<'_>]) {
        if let Some(backend) = &self.backend {
            backend.log(LogLevel::Info, message, fields);
        }
    }

    fn warn(&self, message: &str, fields: &[Field<'_>]) {
        if let Some(backend) = &self.backend {
            backend.log(LogLevel::Warn, message, fields);
        }
    }

    fn error(&self, message: &str, fields: &[Field<'_>]) {
        if let Some(backend) = &self.backend {
            backend.log(LogLevel::Error, message, fields);
        }
    }

    #[track_caller]
    fn trace(&self, begin: Instant, query: QueryProvider<'_>, err: Option<&(dyn Error + 'static)>) {
        let backend = match &self.backend {
            Some(backend) => backend,
            None => return,
        };
        let caller = Location::caller();
        let elapsed = begin.elapsed();
        let slow_threshold = self.config.slow_threshold();

        let reportable_err = err.filter(|err| {
            !(self.config.ignore_record_not_found_error() && is_record_not_found(*err))
        });

        if let (Some(err), true) = (reportable_err, backend.enabled(LogLevel::Error)) {
            let (sql, rows) = query();
            let line = TraceLine { caller, elapsed, rows, sql: &sql };
            backend.log(LogLevel::Error, &self.palette.trace_error(&err, &line), &[]);
        } else if !slow_threshold.is_zero()
            && elapsed >= slow_threshold
            && backend.enabled(LogLevel::Warn)
        {
            let (sql, rows) = query();
            let line = TraceLine { caller, elapsed, rows, sql: &sql };
            let label = self.slow_label();
            backend.log(LogLevel::Warn, &self.palette.trace_warn(&label, &line), &[]);
        } else if backend.level() == Some(LogLevel::Info) {
            let (sql, rows) = query();
            let line = TraceLine { caller, elapsed, rows, sql: &sql };
            backend.log(LogLevel::Info, &self.palette.trace_info(&line), &[]);
        }
    }
}
