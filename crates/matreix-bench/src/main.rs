//! Traversal-order demo: allocate the reference matrix, sum it in both
//! orders, and report the timings.
//!
//! Run with:
//!   cargo run --release -p matreix-bench --bin matreix-demo
//!
//! Set `MATREIX_LOG` to override the default `warn,matreix_bench=info`
//! filter. Exits non-zero if the matrix cannot be allocated or the two
//! orders disagree.

use std::process::ExitCode;

use log::LevelFilter;
use matreix_bench::{exit_code, reference_profile, run};

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATREIX_LOG", "warn,matreix_bench=info"))
        .init();

    exit_code(&run(&reference_profile(0)))
}
