use fpgrowth::fp::{
    build_pass, count_pass, finalize_building, finalize_counts, mine_patterns, StreamingState,
};
use fpgrowth::{FpGrowth, MinSupport, MiningConfig};
use rand::Rng;
use std::time::Instant;

fn generate_transactions(
    num_transactions: usize,
    num_items: u32,
    avg_transaction_size: usize,
    density: f64,
) -> Vec<Vec<u32>> {
    let mut rng = rand::thread_rng();

    (0..num_transactions)
        .map(|_| {
            let random_factor: f64 = rng.r#gen();
            let num_items_in_tx =
                (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;

            let mut tx = Vec::with_capacity(num_items_in_tx);
            for _ in 0..num_items_in_tx {
                let density_check: f64 = rng.r#gen();
                if density_check < density {
                    tx.push(rng.gen_range(0..num_items));
                }
            }
            tx
        })
        .collect()
}

fn stress_test_large_inputs() {
    println!("\n=== Large Input Stress Test ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
        ("100K x 100", 100_000, 100, 25),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        println!("\nTesting: {}", name);

        let start_gen = Instant::now();
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        println!("  Generated in {:?}", start_gen.elapsed());

        let start = Instant::now();
        let growth = FpGrowth::new(MiningConfig::with_fraction(0.01));
        match growth.mine_parallel(transactions.iter().map(|t| t.iter().copied())) {
            Ok(result) => {
                println!("  Completed in {:?}", start.elapsed());
                println!("  Found {} patterns", result.len());
            }
            Err(e) => println!("  Failed: {}", e),
        }
    }
}

fn run_passes(
    state: &mut StreamingState<u32>,
    transactions: &[Vec<u32>],
    chunk_size: usize,
) -> fpgrowth::Result<()> {
    for chunk in transactions.chunks(chunk_size) {
        count_pass(state, chunk.iter().map(|t| t.iter().copied()))?;
    }
    finalize_counts(state, MinSupport::Fraction(0.01))?;
    for chunk in transactions.chunks(chunk_size) {
        build_pass(state, chunk.iter().map(|t| t.iter().copied()))?;
    }
    finalize_building(state)
}

fn stress_test_streaming() {
    println!("\n=== Streaming Stress Test ===");

    let transactions = generate_transactions(100_000, 100, 20, 0.7);
    let chunk_size = 10_000;
    let start = Instant::now();

    let mut state = StreamingState::new();
    if let Err(e) = run_passes(&mut state, &transactions, chunk_size) {
        println!("  Failed: {}", e);
        return;
    }

    match mine_patterns(state, true) {
        Ok(itemsets) => {
            let total = itemsets.count();
            println!("  Completed in {:?}", start.elapsed());
            println!("  Found {} patterns", total);
        }
        Err(e) => println!("  Failed: {}", e),
    }
}

fn stress_test_early_stop() {
    println!("\n=== Early Stop Test ===");

    let transactions = generate_transactions(50_000, 60, 25, 0.9);
    let start = Instant::now();

    let growth = FpGrowth::new(MiningConfig::with_fraction(0.005));
    match growth.mine(transactions.iter().map(|t| t.iter().copied())) {
        Ok(itemsets) => {
            let first: Vec<_> = itemsets.take(1000).collect();
            println!("  First {} patterns in {:?}", first.len(), start.elapsed());
        }
        Err(e) => println!("  Failed: {}", e),
    }
}

fn main() {
    stress_test_large_inputs();
    stress_test_streaming();
    stress_test_early_stop();
}
