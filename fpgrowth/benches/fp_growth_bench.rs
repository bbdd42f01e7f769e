use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fpgrowth::{FpGrowth, MiningConfig};
use rand::Rng;

/// Generate synthetic transactions over items `0..num_items`
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: Probability that a drawn item is kept (0.0-1.0)
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
            tx.sort_unstable();
            tx.dedup();
            tx
        })
        .collect()
}

fn run(transactions: &[Vec<u32>], min_support: f64) -> usize {
    FpGrowth::new(MiningConfig::with_fraction(min_support))
        .mine(transactions.iter().map(|t| t.iter().copied()))
        .map(|itemsets| itemsets.count())
        .unwrap_or(0)
}

fn run_parallel(transactions: &[Vec<u32>], min_support: f64) -> usize {
    FpGrowth::new(MiningConfig::with_fraction(min_support))
        .mine_parallel(transactions.iter().map(|t| t.iter().copied()))
        .map(|itemsets| itemsets.len())
        .unwrap_or(0)
}

/// Benchmark FP-Growth with different dataset sizes
fn bench_fp_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::new("sequential", name), &transactions, |b, tx| {
            b.iter(|| run(black_box(tx), black_box(0.1)));
        });
        group.bench_with_input(BenchmarkId::new("parallel", name), &transactions, |b, tx| {
            b.iter(|| run_parallel(black_box(tx), black_box(0.1)));
        });
    }

    group.finish();
}

/// Benchmark FP-Growth with different min_support thresholds
fn bench_fp_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| run(black_box(&transactions), black_box(sup)));
            },
        );
    }

    group.finish();
}

/// Benchmark FP-Growth with different data densities
fn bench_fp_growth_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("fp_growth_density");

    let densities = vec![
        ("sparse_30", 0.3),
        ("medium_50", 0.5),
        ("dense_70", 0.7),
        ("very_dense_90", 0.9),
    ];

    for (name, density) in densities {
        let transactions = generate_transactions(1000, 50, 10, density);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| run(black_box(tx), black_box(0.1)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fp_growth_scaling,
    bench_fp_growth_min_support,
    bench_fp_growth_density
);
criterion_main!(benches);
