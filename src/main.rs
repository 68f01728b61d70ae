// typedpool - concurrent reuse demo
// Run the single-threaded walkthroughs with: cargo run --example basic

use std::sync::Arc;
use std::time::Duration;

use typedpool::TypedPool;

#[tokio::main]
async fn main() {
    println!("=== typedpool concurrent demo ===");

    // 1 KiB zeroed buffers, constructed only when no idle buffer is available
    let pool = Arc::new(TypedPool::new(|| {
        print!(".");
        vec![0u8; 1024]
    }));

    let mut handles = Vec::new();
    for _ in 0..200 {
        let pool = Arc::clone(&pool);
        handles.push(tokio::spawn(async move {
            let buf = pool.get().detach();
            print!("-");
            tokio::time::sleep(Duration::from_millis(100)).await;
            pool.put(buf);
        }));
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    for handle in handles {
        handle.await.expect("demo task panicked");
    }

    let stats = pool.stats();
    println!("\nretrievals: {}", stats.retrieved);
    println!("constructions: {}", stats.created);
    println!("idle after drain: {}", pool.idle_count());
}
