//! Buffer-backed log formatter on top of TypedPool
//!
//! Each line acquires a shared buffer, clears it, appends a timestamp and the
//! message, writes the result to the sink, and hands the buffer back. The
//! clear happens after get, never before put: reused buffers arrive dirty.

use std::io::{self, Write};

use chrono::Local;
use typedpool::TypedPool;

fn log(pool: &TypedPool<Vec<u8>>, w: &mut impl Write, msg: &str) -> io::Result<()> {
    let mut buf = pool.get();
    buf.clear();

    writeln!(buf, "{} : {}", Local::now().format("%H:%M:%S"), msg)?;
    w.write_all(&buf)
    // buffer returns to the pool when `buf` drops
}

fn main() -> io::Result<()> {
    let pool = TypedPool::new(|| {
        println!("New buffer is created");
        Vec::with_capacity(256)
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    log(&pool, &mut out, "service starting")?;
    log(&pool, &mut out, "listening on :8080")?;
    log(&pool, &mut out, "first request served")?;

    let stats = pool.stats();
    writeln!(
        out,
        "{} lines formatted with {} buffer allocation(s)",
        stats.retrieved, stats.created
    )
}
