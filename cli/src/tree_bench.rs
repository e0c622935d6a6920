use std::sync::Once;

use clap::Parser;
use ubench_core::{runner, tree};

static TRACE_INIT: Once = Once::new();
const DEFAULT_TRACE_FILTER: &str = "ubench_core=debug";

#[derive(Debug, Parser)]
#[command(
    name = "tree-bench",
    version,
    about = "Times repeated recursive sums over a fixed four-node binary tree"
)]
struct CliArgs {
    /// Iteration count override (defaults to the fixed benchmark count)
    #[arg(value_name = "ITERATIONS")]
    iterations: Option<u64>,
}

fn maybe_init_tracing() {
    let raw = match std::env::var("UBENCH_TRACE") {
        Ok(value) => value,
        Err(_) => return,
    };
    if !env_toggle_enabled(&raw) {
        return;
    }

    TRACE_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::fmt;

        let builder = fmt().with_writer(std::io::stderr);
        let builder = match filter_expr_from(&raw).and_then(|expr| EnvFilter::try_new(expr).ok()) {
            Some(filter) => builder.with_env_filter(filter),
            None => builder.with_env_filter(DEFAULT_TRACE_FILTER),
        };
        let _ = builder.try_init();
    });
}

fn env_toggle_enabled(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }
    !(trimmed.eq_ignore_ascii_case("0") || trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("off"))
}

fn filter_expr_from(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("1")
        || trimmed.eq_ignore_ascii_case("true")
        || trimmed.eq_ignore_ascii_case("on")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn main() -> anyhow::Result<()> {
    maybe_init_tracing();

    let CliArgs { iterations } = CliArgs::parse();
    let iterations = iterations.unwrap_or(tree::DEFAULT_ITERATIONS);

    // Built once, traversed on every iteration, alive until process exit.
    let test_tree = tree::build_test_tree();

    let measurement = runner::run_timed(iterations, || tree::tree_sum(Some(&test_tree)))?;

    println!(
        "[Rust] Code with {} iterations took: {:.6}s",
        measurement.iterations,
        measurement.elapsed_secs()
    );
    println!("tree_sum(tree) == {}", measurement.result);

    Ok(())
}
