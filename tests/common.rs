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

//!
//! Shared test backend.
//!
use std::sync::Mutex;

use akita_logger::{Field, LogBackend, LogLevel};

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every entry at or above its minimum level, like a leveled core writing to a buffer.
pub struct CaptureBackend {
    level: Option<LogLevel>,
    entries: Mutex<Vec<Entry>>,
}

impl CaptureBackend {
    pub fn new(level: LogLevel) -> Self {
        CaptureBackend { level: Some(level), entries: Mutex::new(Vec::new()) }
    }

    pub fn off() -> Self {
        CaptureBackend { level: None, entries: Mutex::new(Vec::new()) }
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn at(&self, level: LogLevel) -> Vec<Entry> {
        self.entries().into_iter().filter(|e| e.level == level).collect()
    }
}

impl LogBackend for CaptureBackend {
    fn level(&self) -> Option<LogLevel> {
        self.level
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[Field<'_>]) {
        if !self.enabled(level) {
            return;
        }
        let mut message = message.to_string();
        for (key, value) in fields {
            message.push_str(&format!(" {}={}", key, value));
        }
        self.entries.lock().unwrap().push(Entry { level, message });
    }
}
