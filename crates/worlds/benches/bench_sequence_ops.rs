use std::hint::black_box;
use std::time::Instant;

use algospace_worlds::SequenceWorld;

fn make_world(size: usize) -> SequenceWorld {
    SequenceWorld::with_seed("bench", size, 42).unwrap()
}

fn bench_bubble_sort(size: usize, iterations: usize) {
    let start = Instant::now();
    for _ in 0..iterations {
        let mut w = make_world(size);
        let n = w.len();
        for i in 0..n {
            for j in 0..n - i - 1 {
                if w.compare(j, j + 1).unwrap() == std::cmp::Ordering::Greater {
                    w.swap(j, j + 1).unwrap();
                }
            }
        }
        assert!(black_box(&w).is_solved());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  bubble sort ({size} elements, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_replay(size: usize, iterations: usize) {
    let mut w = make_world(size);
    let initial: Vec<u32> = w.values().to_vec();
    let n = w.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if w.compare(j, j + 1).unwrap() == std::cmp::Ordering::Greater {
                w.swap(j, j + 1).unwrap();
            }
        }
    }
    let events = w.events().to_vec();

    let start = Instant::now();
    for _ in 0..iterations {
        let replayed = SequenceWorld::replay(black_box(&initial), black_box(&events));
        black_box(replayed);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  replay ({} events, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}",
        events.len()
    );
}

fn main() {
    println!("=== Sequence World Benchmarks ===\n");

    println!("Operation surface (performance-tier sizes):");
    bench_bubble_sort(10, 10000);
    bench_bubble_sort(150, 100);
    bench_bubble_sort(1000, 5);

    println!("\nEvent replay:");
    bench_replay(150, 1000);
    bench_replay(1000, 10);

    println!("\n=== Done ===");
}
