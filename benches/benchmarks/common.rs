use std::ops::{Div, Range};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use criterion::Criterion;

pub const MODULUS: u64 = 16;

pub fn execute_parallel<F>(
    criterion: &mut Criterion,
    id: &str,
    block: Arc<F>,
    thread_count: u8)
    where F: Fn(u64) + Send + Sync + 'static {

    criterion.bench_function(id, |bencher| bencher.iter_custom(|iterations| {
        let threads = spawn_threads(block.clone(), thread_count, iterations);

        let mut total_time = Duration::from_nanos(0);
        for thread in threads {
            let elapsed = thread.join().unwrap();
            total_time += elapsed;
        }
        total_time.div(thread_count as u32)
    }));
}

fn spawn_threads<F>(block: Arc<F>, thread_count: u8, iterations: u64) -> Vec<JoinHandle<Duration>> where F: Fn(u64) + Send + Sync + 'static {
    let mut threads = Vec::new();
    for range in iteration_ranges(iterations, thread_count) {
        threads.push(thread::spawn({
            let block = block.clone();
            move || {
                let start = Instant::now();
                for index in range {
                    block(index);
                }
                start.elapsed()
            }
        }));
    }
    threads
}

/// Splits `0..iterations` into one contiguous range per thread; the last range also takes the remainder.
pub fn iteration_ranges(iterations: u64, thread_count: u8) -> Vec<Range<u64>> {
    let per_thread_iterations = iterations / thread_count as u64;
    let mut current_start = 0;

    let mut ranges = Vec::with_capacity(thread_count as usize);
    for thread_id in 1..=thread_count {
        let current_end = if thread_id == thread_count { iterations } else { current_start + per_thread_iterations };
        ranges.push(current_start..current_end);
        current_start = current_end;
    }
    ranges
}
