//! Host binding for `setWindowExcludeFromCapture`
//!
//! The host passes positional, dynamically typed values. They are checked
//! here and turned into a [`WindowHandle`] and a flag before the platform is
//! touched. The frontend reaches it through `setWindowExcludeFromCapture`
//! in `guest-js`.

use crate::affinity::{self, AffinityMutator, PlatformMutator, WindowHandle};
use crate::utils::error::{BridgeError, BridgeResult};
use serde_json::{Number, Value};

const ARITY: usize = 2;

/// `setWindowExcludeFromCapture(handle: number, exclude: boolean) -> boolean`
pub fn set_window_exclude_from_capture(args: &[Value]) -> BridgeResult<bool> {
    set_window_exclude_from_capture_with(&PlatformMutator, args)
}

pub fn set_window_exclude_from_capture_with<M: AffinityMutator>(
    mutator: &M,
    args: &[Value],
) -> BridgeResult<bool> {
    let (handle, exclude) = parse_args(args)?;
    Ok(affinity::set_window_exclude_from_capture_with(
        mutator, handle, exclude,
    ))
}

fn parse_args(args: &[Value]) -> BridgeResult<(WindowHandle, bool)> {
    if args.len() != ARITY {
        return Err(BridgeError::ArgumentCount {
            expected: ARITY,
            actual: args.len(),
        });
    }

    let handle = match &args[0] {
        Value::Number(n) => WindowHandle::from_raw(number_to_i64(n)),
        other => {
            return Err(BridgeError::ArgumentType {
                index: 0,
                expected: "number",
                actual: type_name(other),
            })
        }
    };

    let exclude = match &args[1] {
        Value::Bool(b) => *b,
        other => {
            return Err(BridgeError::ArgumentType {
                index: 1,
                expected: "boolean",
                actual: type_name(other),
            })
        }
    };

    Ok((handle, exclude))
}

/// Integers pass through, out-of-range values saturate and fractions truncate
fn number_to_i64(n: &Number) -> i64 {
    if let Some(v) = n.as_i64() {
        v
    } else if let Some(v) = n.as_u64() {
        i64::try_from(v).unwrap_or(i64::MAX)
    } else {
        n.as_f64().map(|f| f as i64).unwrap_or_default()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affinity::tests::RecordingMutator;
    use crate::affinity::DisplayAffinity;
    use serde_json::json;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_wrong_argument_count() {
        let mutator = RecordingMutator::with_live(&[1]);

        for args in [vec![], vec![json!(1)], vec![json!(1), json!(true), json!(0)]] {
            let err = set_window_exclude_from_capture_with(&mutator, &args).unwrap_err();
            assert_eq!(
                err,
                BridgeError::ArgumentCount {
                    expected: 2,
                    actual: args.len()
                }
            );
        }
        assert!(mutator.calls().is_empty());
    }

    #[test]
    fn test_non_numeric_handle() {
        let mutator = RecordingMutator::with_live(&[1]);

        for handle in [json!("1"), json!(null), json!(true), json!([1]), json!({})] {
            let err =
                set_window_exclude_from_capture_with(&mutator, &[handle, json!(true)]).unwrap_err();
            assert!(matches!(err, BridgeError::ArgumentType { index: 0, .. }));
        }
        assert!(mutator.calls().is_empty());
    }

    #[test]
    fn test_non_boolean_flag() {
        let mutator = RecordingMutator::with_live(&[1]);

        for flag in [json!(1), json!("true"), json!(null)] {
            let err = set_window_exclude_from_capture_with(&mutator, &[json!(1), flag]).unwrap_err();
            assert!(matches!(
                err,
                BridgeError::ArgumentType {
                    index: 1,
                    expected: "boolean",
                    ..
                }
            ));
        }
        assert!(mutator.calls().is_empty());
    }

    #[test]
    fn test_exclude_dispatches_exclusion_code() {
        init_tracing();
        let mutator = RecordingMutator::with_live(&[0x000a_0b0c]);

        let ok = set_window_exclude_from_capture_with(&mutator, &[json!(0x000a_0b0c), json!(true)])
            .unwrap();

        assert!(ok);
        assert_eq!(
            mutator.calls(),
            vec![(
                WindowHandle::from_raw(0x000a_0b0c),
                DisplayAffinity::ExcludeFromCapture
            )]
        );
    }

    #[test]
    fn test_include_dispatches_zero() {
        let mutator = RecordingMutator::with_live(&[99]);

        let ok = set_window_exclude_from_capture_with(&mutator, &[json!(99), json!(false)]).unwrap();

        assert!(ok);
        let calls = mutator.calls();
        assert_eq!(calls[0].1.code(), 0);
    }

    #[test]
    fn test_destroyed_handle_is_false_not_error() {
        let mutator = RecordingMutator::with_live(&[]);

        let result = set_window_exclude_from_capture_with(&mutator, &[json!(12345), json!(true)]);
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn test_same_arguments_same_result() {
        let mutator = RecordingMutator::with_live(&[5]);
        let args = [json!(5), json!(true)];

        let first = set_window_exclude_from_capture_with(&mutator, &args);
        let second = set_window_exclude_from_capture_with(&mutator, &args);
        assert_eq!(first, second);
        assert_eq!(mutator.calls().len(), 2);
    }

    #[test]
    fn test_handle_number_conversion() {
        let mutator = RecordingMutator::with_live(&[]);

        set_window_exclude_from_capture_with(&mutator, &[json!(-1), json!(true)]).unwrap();
        set_window_exclude_from_capture_with(&mutator, &[json!(12.9), json!(true)]).unwrap();
        set_window_exclude_from_capture_with(&mutator, &[json!(-12.9), json!(true)]).unwrap();

        let handles: Vec<i64> = mutator.calls().iter().map(|(h, _)| h.as_raw()).collect();
        assert_eq!(handles, vec![-1, 12, -12]);
    }

    #[test]
    fn test_out_of_range_handles_saturate() {
        let mutator = RecordingMutator::with_live(&[]);

        set_window_exclude_from_capture_with(&mutator, &[json!(1u64 << 63), json!(true)]).unwrap();
        set_window_exclude_from_capture_with(&mutator, &[json!(u64::MAX), json!(true)]).unwrap();
        set_window_exclude_from_capture_with(&mutator, &[json!(1e300), json!(true)]).unwrap();
        set_window_exclude_from_capture_with(&mutator, &[json!(-1e300), json!(true)]).unwrap();

        let handles: Vec<i64> = mutator.calls().iter().map(|(h, _)| h.as_raw()).collect();
        assert_eq!(handles, vec![i64::MAX, i64::MAX, i64::MAX, i64::MIN]);
    }
}
