//! Solves a few quadratic equations and prints the outcome.
//!
//! ```text
//! cargo run --example quadratic
//! ```

use quadroots::{Quadratic, solve};

fn main() {
    // Two distinct roots.
    report(Some(1.0), Some(-1.0), Some(-6.0));

    // No real roots.
    report(Some(1.0), Some(0.0), Some(1.0));

    // A near-zero discriminant snaps to a double root.
    report(Some(0.0001), Some(0.001), Some(0.002));

    // Rejected inputs.
    report(Some(0.0), Some(2.0), Some(1.0));
    report(Some(1.0), None, Some(1.0));

    // Holding on to a validated equation.
    let equation = Quadratic::new(2.0, 3.0, -4.0).expect("coefficients are valid");
    println!(
        "2x² + 3x - 4 = 0: discriminant {:.3}, roots {:?}",
        equation.discriminant(),
        equation.roots().as_slice()
    );
}

fn report(a: Option<f64>, b: Option<f64>, c: Option<f64>) {
    match solve(a, b, c) {
        Ok(roots) if roots.is_empty() => println!("({a:?}, {b:?}, {c:?}): no real roots"),
        Ok(roots) => println!("({a:?}, {b:?}, {c:?}): roots {:?}", roots.as_slice()),
        Err(error) => println!("({a:?}, {b:?}, {c:?}): rejected, {error}"),
    }
}
