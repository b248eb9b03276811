//! Walks a comparator heap through prepare, push, update and pop,
//! printing the array layout after each step.
//!
//! ```bash
//! cargo run --bin heap_demo -- --values 16,5,6,8,10,0,2 --push 3 --update-index 0 --update-value 4
//! RUST_LOG=trace cargo run --bin heap_demo -- --order max
//! ```

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::*;
use rust_comparator_heap::{BinaryHeap, Comparator, HeapError};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    /// Smallest value at the root
    Min,
    /// Largest value at the root
    Max,
}

impl Comparator<i64> for Order {
    fn compare(&self, parent: &i64, child: &i64) -> i32 {
        let keep = match self {
            Order::Min => parent <= child,
            Order::Max => parent >= child,
        };
        if keep {
            -1
        } else {
            1
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Exercise a comparator-ordered binary heap")]
struct Cli {
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "16,5,6,8,10,0,2"
    )]
    values: Vec<i64>,

    #[arg(long, value_enum, default_value_t = Order::Min)]
    order: Order,

    #[arg(long, allow_negative_numbers = true, default_value_t = 3)]
    push: i64,

    #[arg(long, default_value_t = 0)]
    update_index: usize,

    #[arg(long, allow_negative_numbers = true, default_value_t = 4)]
    update_value: i64,
}

fn print(heap: &BinaryHeap<i64, Order>) -> Result<(), HeapError> {
    for i in 0..heap.size() {
        println!("[{}]\t{}", i, heap.try_get(i)?);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), HeapError> {
    let mut heap = BinaryHeap::new();
    heap.prepare(cli.values.iter().copied(), cli.order);
    info!("prepared {} values in {:?} order", heap.size(), cli.order);
    print(&heap)?;

    println!(">>>> PUSH: {}", cli.push);
    heap.try_push(cli.push)?;
    print(&heap)?;

    println!(">>>> UPDATE: [{}] {}", cli.update_index, cli.update_value);
    let previous = heap.try_update(cli.update_index, cli.update_value)?;
    debug!("replaced {} at index {}", previous, cli.update_index);
    print(&heap)?;

    println!(">>>> POP: {}", heap.try_pop()?);
    print(&heap)?;

    debug_assert!(heap.is_valid());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    debug!("{:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
