//! Basic usage examples for TypedPool

use std::time::Duration;

use typedpool::{PoolConfig, TypedPool};

fn main() {
    println!("=== typedpool - Basic Examples ===\n");

    // Example 1: Simple reuse walkthrough
    simple_reuse();

    // Example 2: Pool with configuration
    configured_pool();

    // Example 3: Try methods
    try_methods();

    // Example 4: Stats export
    stats_export();
}

fn simple_reuse() {
    println!("1. Simple Reuse:");
    let pool = TypedPool::new(|| vec![0u8; 1024]);

    // First get allocates since the pool starts empty
    let buf = pool.get();
    println!("   Got buffer from pool, of length: {}", buf.len());
    drop(buf); // returned to the pool

    // This time the buffer is reused
    let reused = pool.get();
    println!("   Got reused buffer from pool, of length: {}", reused.len());
    println!("   Constructions so far: {}\n", pool.stats().created);
}

fn configured_pool() {
    println!("2. Configured Pool:");

    let config = PoolConfig::new()
        .with_max_idle(8)
        .with_idle_timeout(Duration::from_secs(30))
        .with_warmup(4);

    let pool = TypedPool::with_config(|| vec![0u8; 1024], config);
    println!("   Idle after warmup: {}", pool.idle_count());

    {
        let _a = pool.get();
        let _b = pool.get();
        println!("   Idle while two held: {}", pool.idle_count());
    }

    println!("   Idle after return: {}\n", pool.idle_count());
}

fn try_methods() {
    println!("3. Try Methods:");
    let pool = TypedPool::new(String::new);

    // Nothing idle yet, and try_get never constructs
    assert!(pool.try_get().is_none());
    println!("   First try: None (nothing idle)");

    drop(pool.get()); // construct and return one
    let item = pool.try_get();
    assert!(item.is_some());
    println!("   Second try: Success\n");
}

fn stats_export() {
    println!("4. Stats Export:");
    let pool = TypedPool::new(|| vec![0u8; 1024]);

    drop(pool.get());
    let _held = pool.get();

    println!("   Snapshot:");
    for (key, value) in pool.export_stats() {
        println!("     {}: {}", key, value);
    }
}
