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
//! Trace message rendering, plain or with ANSI colors.
//!
use std::fmt::{self, Display};
use std::panic::Location;
use std::time::Duration;

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const BLUE_BOLD: &str = "\x1b[34;1m";
pub const MAGENTA_BOLD: &str = "\x1b[35;1m";
pub const RED_BOLD: &str = "\x1b[31;1m";
pub const YELLOW_BOLD: &str = "\x1b[33;1m";

/// Map the database layer's signed row count onto `Option`; negative means unknown.
pub fn rows_from_raw(rows: i64) -> Option<u64> {
    u64::try_from(rows).ok()
}

/// How trace segments are decorated. Picked once from `Config::colorful`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Ansi,
}

impl Palette {
    pub fn new(colorful: bool) -> Self {
        if colorful {
            Palette::Ansi
        } else {
            Palette::Plain
        }
    }

    fn paint<T: Display>(self, color: &'static str, value: T) -> Painted<T> {
        let color = match self {
            Palette::Plain => None,
            Palette::Ansi => Some(color),
        };
        Painted { color, value }
    }

    /// `{caller}\n[{ms}ms] [rows:{rows}] {sql}`
    pub fn trace_info(self, line: &TraceLine<'_>) -> String {
        format!(
            "{}\n{} {} {}",
            self.paint(GREEN, line.caller),
            self.paint(YELLOW, Millis(line.elapsed)),
            self.paint(BLUE_BOLD, RowsTag(line.rows)),
            line.sql,
        )
    }

    /// `{caller} {label}\n[{ms}ms] [rows:{rows}] {sql}`
    pub fn trace_warn(self, label: &str, line: &TraceLine<'_>) -> String {
        format!(
            "{} {}\n{} {} {}",
            self.paint(GREEN, line.caller),
            self.paint(YELLOW, label),
            self.paint(RED_BOLD, Millis(line.elapsed)),
            self.paint(YELLOW, RowsTag(line.rows)),
            self.paint(MAGENTA, line.sql),
        )
    }

    /// `{caller} {error}\n[{ms}ms] [rows:{rows}] {sql}`
    pub fn trace_error(self, err: &dyn Display, line: &TraceLine<'_>) -> String {
        format!(
            "{} {}\n{} {} {}",
            self.paint(RED_BOLD, line.caller),
            self.paint(MAGENTA_BOLD, err),
            self.paint(YELLOW, Millis(line.elapsed)),
            self.paint(BLUE_BOLD, RowsTag(line.rows)),
            line.sql,
        )
    }
}

/// The parts shared by every trace template.
#[derive(Debug, Clone, Copy)]
pub struct TraceLine<'a> {
    pub caller: &'a Location<'a>,
    pub elapsed: Duration,
    pub rows: Option<u64>,
    pub sql: &'a str,
}

struct Painted<T> {
    color: Option<&'static str>,
    value: T,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}{}{}", color, self.value, RESET),
            None => self.value.fmt(f),
        }
    }
}

struct Millis(Duration);

impl Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}ms]", self.0.as_nanos() as f64 / 1e6)
    }
}

struct RowsTag(Option<u64>);

impl Display for RowsTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(rows) => write!(f, "[rows:{}]", rows),
            None => write!(f, "[rows:-]"),
        }
    }
}
