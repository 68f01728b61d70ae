//! Log-line formatting with and without buffer pooling

use std::io::{self, Write};

use chrono::Local;
use criterion::{criterion_group, criterion_main, Criterion};
use typedpool::TypedPool;

fn log_no_pool(w: &mut impl Write, msg: &str) {
    let mut buf = Vec::with_capacity(64);
    let _ = write!(buf, "{} : {}", Local::now().format("%H:%M:%S"), msg);
    let _ = w.write_all(&buf);
}

fn log_with_pool(pool: &TypedPool<Vec<u8>>, w: &mut impl Write, msg: &str) {
    let mut buf = pool.get();
    buf.clear();

    let _ = write!(buf, "{} : {}", Local::now().format("%H:%M:%S"), msg);
    let _ = w.write_all(&buf);
}

fn bench_log_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_formatting");

    group.bench_function("no_pool", |b| {
        let mut sink = io::sink();
        b.iter(|| log_no_pool(&mut sink, "some log message"));
    });

    group.bench_function("with_pool", |b| {
        let pool = TypedPool::new(|| Vec::with_capacity(64));
        let mut sink = io::sink();
        b.iter(|| log_with_pool(&pool, &mut sink, "some log message"));
    });

    group.finish();
}

criterion_group!(benches, bench_log_formatting);
criterion_main!(benches);
