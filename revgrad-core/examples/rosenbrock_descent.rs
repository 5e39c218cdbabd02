//! # Gradient Descent on the Rosenbrock Function
//!
//! Minimizes `100 * (x1 - x0^2)^2 + (x0 - 1)^2` starting from `(0, 2)`.
//!
//! Each iteration:
//! 1.  Builds the graph for the current point (forward pass).
//! 2.  Runs `backward` to populate the gradients of `x0` and `x1`.
//! 3.  Updates both leaves in place with `set_value`, outside of recording.
//! 4.  Clears the leaf gradients before the next iteration.
//!
//! ## Running
//! `cargo run --example rosenbrock_descent`

use revgrad_core::ops::pow;
use revgrad_core::{config, Node, RevgradError, Value};

fn rosenbrock(x0: &Node, x1: &Node) -> Result<Node, RevgradError> {
    let inner = (x1 - &pow(x0, 2.0)?)?;
    let a = (100.0 * &pow(&inner, 2.0)?)?;
    let b = pow((x0 - 1.0)?, 2.0)?;
    &a + &b
}

fn step(param: &Node, lr: f64) -> Result<(), RevgradError> {
    let grad = param.grad().ok_or_else(|| {
        RevgradError::BrokenInvariant("parameter received no gradient".to_string())
    })?;
    let updated: Value = &param.require_value()? - &(grad * lr);
    param.set_value(updated)
}

fn main() -> Result<(), RevgradError> {
    let x0 = Node::from(0.0);
    let x1 = Node::from(2.0);
    x0.set_name("x0");
    x1.set_name("x1");

    let lr = 0.001;
    let iters = 10_000;

    println!("Starting descent from x0={} x1={}", x0, x1);
    for i in 0..iters {
        let y = rosenbrock(&x0, &x1)?;
        y.backward()?;

        {
            let _guard = config::with_recording_disabled();
            step(&x0, lr)?;
            step(&x1, lr)?;
        }
        x0.clear_gradient();
        x1.clear_gradient();

        if i % 1000 == 0 {
            let loss = y.require_value()?[[]];
            println!("iter {:>5}: loss = {:.6}", i, loss);
        }
    }

    let final_loss = rosenbrock(&x0, &x1)?.require_value()?[[]];
    println!(
        "Finished: x0 = {:.4}, x1 = {:.4}, loss = {:.6}",
        x0.require_value()?[[]],
        x1.require_value()?[[]],
        final_loss
    );
    Ok(())
}
