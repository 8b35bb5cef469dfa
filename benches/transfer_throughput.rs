//! Benchmark suite for the transfer protocol
//!
//! This benchmark measures the hot path of `Transaction::make` using the
//! divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Three variants are measured:
//! - An applied transfer (all checks pass, both accounts mutated)
//! - A refused transfer (insufficient funds, no locks taken)
//! - The bare lock/unlock cycle on a single account

use transfer_engine::{Account, Transaction};

fn main() {
    divan::main();
}

/// Benchmark an applied transfer between two well-funded accounts
#[divan::bench]
fn applied_transfer(bencher: divan::Bencher) {
    let from = Account::new(0, i64::MAX / 2);
    let to = Account::new(1, 0);
    let mut tx = Transaction::new();
    tx.set_fee(10);

    bencher.bench_local(|| tx.make(&from, &to, 100).unwrap());
}

/// Benchmark a refused transfer (insufficient funds, validation only)
#[divan::bench]
fn refused_transfer(bencher: divan::Bencher) {
    let from = Account::new(0, 50);
    let to = Account::new(1, 0);
    let mut tx = Transaction::new();
    tx.set_fee(10);

    bencher.bench_local(|| tx.make(&from, &to, 100).unwrap());
}

/// Benchmark the bare lock/unlock cycle
#[divan::bench]
fn lock_unlock_cycle(bencher: divan::Bencher) {
    let account = Account::new(0, 1000);

    bencher.bench_local(|| {
        account.lock().unwrap();
        account.unlock();
    });
}
