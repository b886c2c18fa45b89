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

use std::time::Duration;
use serde::Deserialize;

use crate::errors::Result;

/// Settings for [`TraceLogger`](crate::TraceLogger). Fixed once the logger is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct Config {
    slow_threshold: Duration,
    colorful: bool,
    ignore_record_not_found_error: bool,
    parameterized_queries: bool,
}

/// On-disk shape of [`Config`]: the threshold is written in milliseconds.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    slow_threshold_ms: u64,
    colorful: bool,
    ignore_record_not_found_error: bool,
    parameterized_queries: bool,
}

impl From<ConfigFile> for Config {
    fn from(v: ConfigFile) -> Self {
        Config {
            slow_threshold: Duration::from_millis(v.slow_threshold_ms),
            colorful: v.colorful,
            ignore_record_not_found_error: v.ignore_record_not_found_error,
            parameterized_queries: v.parameterized_queries,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Parse a JSON document such as `{"slow_threshold_ms": 200, "colorful": true}`.
    /// Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Traces lasting at least this long are logged as slow queries. Zero disables the check.
    pub fn set_slow_threshold(mut self, slow_threshold: Duration) -> Self {
        self.slow_threshold = slow_threshold;
        self
    }

    pub fn slow_threshold(&self) -> Duration {
        self.slow_threshold
    }

    pub fn set_colorful(mut self, colorful: bool) -> Self {
        self.colorful = colorful;
        self
    }

    pub fn colorful(&self) -> bool {
        self.colorful
    }

    pub fn set_ignore_record_not_found_error(mut self, ignore: bool) -> Self {
        self.ignore_record_not_found_error = ignore;
        self
    }

    pub fn ignore_record_not_found_error(&self) -> bool {
        self.ignore_record_not_found_error
    }

    /// Kept for parity with the database layer's logger settings. Not consulted when tracing.
    pub fn set_parameterized_queries(mut self, parameterized_queries: bool) -> Self {
        self.parameterized_queries = parameterized_queries;
        self
    }

    pub fn parameterized_queries(&self) -> bool {
        self.parameterized_queries
    }
}
