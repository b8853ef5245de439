// Insertion benchmark - measures push and extend_with throughput

use std::time::Instant;

use ballast::bounds::Bounds;
use ballast::list::WeightedList;

fn main() {
    let n = 50_000usize;

    // Pseudo-random weights, fixed seed so runs are comparable.
    let mut state = 0x2545f491_4f6cdd1du64;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        values.push((state % 1_000_000) as i64);
    }

    println!("=== push() benchmark ===");
    let mut list = WeightedList::with_capacity(n, Bounds::inclusive(0.0, 1_000_000.0), |v: &i64| {
        *v as f64
    });
    let start = Instant::now();
    for &value in &values {
        list.push(value);
    }
    let push_time = start.elapsed();
    println!("  {} single inserts: {:?}", n, push_time);
    println!("  per insert: {:?}", push_time / n as u32);
    println!("  final length: {}", list.len());

    println!("\n=== extend_with() benchmark ===");
    let mut list = WeightedList::with_capacity(n, Bounds::inclusive(0.0, 1_000_000.0), |v: &i64| {
        *v as f64
    });
    let start = Instant::now();
    list.extend_with(values.iter().copied());
    let extend_time = start.elapsed();
    println!("  {} elements in one bulk insert: {:?}", n, extend_time);
    println!("  final length: {}", list.len());

    println!("\n=== remove_where() benchmark ===");
    let start = Instant::now();
    list.remove_where(|value| value % 2 == 0);
    let compact_time = start.elapsed();
    println!("  one compaction pass: {:?}", compact_time);
    println!("  final length: {}", list.len());

    println!("\n=== cursor walk benchmark ===");
    let start = Instant::now();
    let mut cursor = list.cursor();
    let mut sum = 0i64;
    while let Ok(value) = cursor.next() {
        sum += *value;
    }
    let walk_time = start.elapsed();
    println!("  full walk: {:?} (checksum {})", walk_time, sum);
}
