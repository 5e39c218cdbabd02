use super::*;
use crate::error::RevgradError;

#[test]
fn test_recording_enabled_by_default() {
    assert!(is_recording_enabled());
}

#[test]
fn test_guard_restores_on_scope_exit() {
    {
        let _guard = with_recording_disabled();
        assert!(!is_recording_enabled());
    }
    assert!(is_recording_enabled());
}

#[test]
fn test_nested_guards_restore_previous_value() {
    let outer = with_recording_disabled();
    {
        let _inner = using_recording(true);
        assert!(is_recording_enabled());
        {
            let _innermost = with_recording_disabled();
            assert!(!is_recording_enabled());
        }
        assert!(is_recording_enabled());
    }
    assert!(!is_recording_enabled());
    drop(outer);
    assert!(is_recording_enabled());
}

#[test]
fn test_guard_restores_on_early_error_return() {
    fn fails_inside_scope() -> Result<(), RevgradError> {
        let _guard = with_recording_disabled();
        crate::value::from_shape_vec(vec![2], vec![1.0])?;
        Ok(())
    }
    assert!(matches!(
        fails_inside_scope(),
        Err(RevgradError::InvalidValueType(_))
    ));
    assert!(is_recording_enabled());
}

#[test]
fn test_guard_restores_on_panic() {
    let result = std::panic::catch_unwind(|| {
        let _guard = with_recording_disabled();
        panic!("unwinding through the guard");
    });
    assert!(result.is_err());
    assert!(is_recording_enabled());
}

#[test]
fn test_no_grad_returns_closure_result() {
    let observed = no_grad(is_recording_enabled);
    assert!(!observed);
    assert!(is_recording_enabled());
}

#[test]
fn test_flag_is_thread_scoped() {
    let _guard = with_recording_disabled();
    let other_thread = std::thread::spawn(is_recording_enabled)
        .join()
        .expect("thread panicked");
    assert!(other_thread);
    assert!(!is_recording_enabled());
}
