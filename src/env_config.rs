//! Shared environment configuration for the sweep binary.

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8).
/// Builds the rayon global thread pool. Returns the thread count.
pub fn init_rayon_threads() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok(); // May fail if already initialized
    println!("Rayon threads: {}", num_threads);
    num_threads
}
