use anyhow::{Context, Result};
use clap::Parser;
use dual_number::DualNumber;
use forward::check::verify_gradient;
use forward::gradient_named;
use named_vars::NamedVars;
use named_vars_derive::NamedVars;
use nalgebra::SVector;
use num_dual::{Dual64, DualNum};

/// Forward-mode differentiation of f(x1, x2) = ln(x1) + x1*x2 - sin(x2)
#[derive(Parser)]
#[command(name = "dual-demo")]
#[command(version)]
struct Cli {
    /// Value of x1 (ln(x1) requires x1 > 0)
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true)]
    x1: f64,

    /// Value of x2
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    x2: f64,

    /// Step for the central finite-difference check
    #[arg(long, default_value_t = 1e-6)]
    fd_step: f64,

    /// Accepted disagreement with the reference values
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

#[derive(Debug, Copy, Clone, NamedVars)]
struct Inputs<T> {
    x1: T,
    x2: T,
}

type Inputs64 = Inputs<f64>;
type InputsDual = Inputs<DualNumber>;
type InputsRef = Inputs<Dual64>;

fn f(v: &InputsDual) -> dual_number::Result<DualNumber> {
    Ok(v.x1.ln()? + v.x1 * v.x2 - v.x2.sin())
}

fn f_reference(v: &InputsRef) -> Dual64 {
    v.x1.ln() + v.x1 * v.x2 - v.x2.sin()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let point = Inputs64 { x1: cli.x1, x2: cli.x2 };
    tracing::info!(x1 = point.x1, x2 = point.x2, "evaluating");

    let point_svec = point.to_svector();

    // One pass per input: seed it with tangent 1, hold the others at 0.
    for (i, name) in Inputs64::NAMES.iter().enumerate() {
        let seeded = forward::seed(&point_svec, &forward::unit(i)?);
        let out = f(&InputsDual::from_svector(&seeded))
            .with_context(|| format!("differentiating w.r.t. {name}"))?;
        println!("d/d{name}: {out}");

        let mut reference_seed = point_svec.map(Dual64::from);
        reference_seed[i].eps = 1.0;
        let reference = f_reference(&InputsRef::from_svector(&reference_seed));
        let diff = (out.tangent() - reference.eps).abs();
        println!("  num-dual: value:{:.4}, grad:{} (|diff| = {diff:e})", reference.re, reference.eps);
        if diff > cli.tolerance * reference.eps.abs().max(1.0) {
            tracing::warn!(name = *name, diff, "disagreement with num-dual");
        }
    }

    let (value, partials) = gradient_named(f, &point).context("computing gradient")?;
    println!("f = {value:.4}");
    for (name, partial) in partials.named() {
        println!("  df/d{name} = {partial:.4}");
    }

    let check = verify_gradient(
        |x: &SVector<DualNumber, 2>| f(&InputsDual::from_svector(x)),
        &point_svec,
        cli.fd_step,
        cli.tolerance,
    )?;
    println!(
        "finite-difference check: {} (max error {:e})",
        if check.passed() { "ok" } else { "FAILED" },
        check.max_error()
    );

    Ok(())
}
