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

// benches/trace.rs
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use akita_logger::*;

/// Accepts everything at or above `level` and throws it away.
struct Discard(LogLevel);

impl LogBackend for Discard {
    fn level(&self) -> Option<LogLevel> {
        Some(self.0)
    }

    fn log(&self, _level: LogLevel, message: &str, _fields: &[Field<'_>]) {
        black_box(message);
    }
}

fn query() -> (String, Option<u64>) {
    ("SELECT id, name FROM t_system_user WHERE status = 1 AND level > 2".to_string(), Some(20))
}

pub fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    group.measurement_time(Duration::from_secs(3));

    // Benchmark: backend above info, nothing is formatted
    let skipped = TraceLogger::new(Some(Discard(LogLevel::Error)), Config::default());
    group.bench_function("skipped", |b| {
        b.iter(|| skipped.trace(black_box(Instant::now()), &mut query, None));
    });

    // Benchmark: plain info line
    let plain = TraceLogger::new(Some(Discard(LogLevel::Info)), Config::default());
    group.bench_function("info_plain", |b| {
        b.iter(|| plain.trace(black_box(Instant::now()), &mut query, None));
    });

    // Benchmark: colored info line
    let colored = TraceLogger::new(
        Some(Discard(LogLevel::Info)),
        Config::default().set_colorful(true),
    );
    group.bench_function("info_colored", |b| {
        b.iter(|| colored.trace(black_box(Instant::now()), &mut query, None));
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .sample_size(20);
    targets = bench_trace
);

criterion_main!(benches);
