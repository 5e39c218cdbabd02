mod common;

use approx::assert_relative_eq;
use common::{rosenbrock, scalar_grad};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use revgrad_core::autograd::grad_check::{check_grad, GradCheckError};
use revgrad_core::config;
use revgrad_core::ops::{add, cos, div, exp, mul, sin, square, sub};
use revgrad_core::{Node, RevgradError};

const CASES: usize = 25;

fn random_vector(rng: &mut StdRng, len: usize) -> Result<Node, RevgradError> {
    let data = (0..len).map(|_| rng.gen_range(-1.5..1.5)).collect();
    Node::from_shape_vec(vec![len], data)
}

#[test]
fn test_chain_rule_matches_finite_differences() -> Result<(), GradCheckError> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let x = random_vector(&mut rng, 4)?;
        check_grad(
            |inputs| sin(exp(square(&inputs[0])?)?),
            &[x],
            1e-6,
            1e-5,
        )?;
    }
    Ok(())
}

#[test]
fn test_binary_ops_match_finite_differences() -> Result<(), GradCheckError> {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let a = random_vector(&mut rng, 3)?;
        // Keep the divisor away from zero
        let b = Node::from_shape_vec(
            vec![3],
            (0..3).map(|_| rng.gen_range(0.5..2.0)).collect(),
        )?;
        check_grad(
            |inputs| {
                let num = sub(mul(&inputs[0], &inputs[1])?, cos(&inputs[0])?)?;
                div(num, add(&inputs[1], 1.0)?)
            },
            &[a, b],
            1e-6,
            1e-5,
        )?;
    }
    Ok(())
}

#[test]
fn test_rosenbrock_matches_finite_differences() -> Result<(), GradCheckError> {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..CASES {
        let x0 = Node::from(rng.gen_range(-2.0..2.0));
        let x1 = Node::from(rng.gen_range(-1.0..3.0));
        check_grad(
            |inputs| rosenbrock(&inputs[0], &inputs[1]),
            &[x0, x1],
            1e-6,
            1e-4,
        )?;
    }
    Ok(())
}

#[test]
fn test_vector_rosenbrock_matches_finite_differences() -> Result<(), GradCheckError> {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..CASES {
        let x0 = random_vector(&mut rng, 3)?;
        let x1 = random_vector(&mut rng, 3)?;
        check_grad(
            |inputs| rosenbrock(&inputs[0], &inputs[1]),
            &[x0, x1],
            1e-6,
            1e-4,
        )?;
    }
    Ok(())
}

#[test]
fn test_scalar_leaf_mixed_with_vector_matches_finite_differences() -> Result<(), GradCheckError> {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..CASES {
        let x = random_vector(&mut rng, 4)?;
        let c = Node::from(rng.gen_range(0.5..2.0));
        check_grad(
            |inputs| mul(sin(&inputs[0])?, div(&inputs[1], add(&inputs[0], 3.0)?)?),
            &[x, c],
            1e-6,
            1e-5,
        )?;
    }
    Ok(())
}

#[test]
fn test_diamond_gradient_is_sum_of_branches() -> Result<(), RevgradError> {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..CASES {
        let v: f64 = rng.gen_range(-1.0..1.0);

        let a = Node::from(v);
        let y = add(sin(&a)?, exp(&a)?)?;
        y.backward()?;

        let only_sin = Node::from(v);
        sin(&only_sin)?.backward()?;
        let only_exp = Node::from(v);
        exp(&only_exp)?.backward()?;

        assert_relative_eq!(
            scalar_grad(&a),
            scalar_grad(&only_sin) + scalar_grad(&only_exp),
            epsilon = 1e-12
        );
    }
    Ok(())
}

#[test]
fn test_recompute_after_clear_is_stable() -> Result<(), RevgradError> {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..CASES {
        let x0 = Node::from(rng.gen_range(-2.0..2.0));
        let x1 = Node::from(rng.gen_range(-2.0..2.0));
        let y = rosenbrock(&x0, &x1)?;

        y.compute_gradients(true)?;
        let first = (scalar_grad(&x0), scalar_grad(&x1));

        // Clear every node that can hold a gradient: the leaves and the
        // retained terminal
        x0.clear_gradient();
        x1.clear_gradient();
        y.clear_gradient();
        y.compute_gradients(false)?;

        assert_relative_eq!(scalar_grad(&x0), first.0);
        assert_relative_eq!(scalar_grad(&x1), first.1);
    }
    Ok(())
}

#[test]
fn test_disabled_recording_never_links() -> Result<(), RevgradError> {
    let mut rng = StdRng::seed_from_u64(29);
    let _guard = config::with_recording_disabled();
    for _ in 0..CASES {
        let x = random_vector(&mut rng, 2)?;
        let y = mul(sin(&x)?, square(&x)?)?;
        assert!(y.producer().is_none());
        assert_eq!(y.generation(), 0);
        y.backward()?;
        assert!(x.grad().is_none());
    }
    Ok(())
}
