use cadence_core::{CadenceError, Capability};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// Wraps `futures::future::join_all(tasks)` with `crate::core::with_request_deadline`.
/// On timeout returns `CadenceError::RequestTimeout("request")`, which call sites
/// remap to their capability label.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, CadenceError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}

/// Collapse the errors of every attempted connector into one outcome.
///
/// - Nothing attempted: `Unsupported(capability)`.
/// - Every attempt timed out: `AllProvidersTimedOut(capability)`.
/// - Every attempt answered `NotFound` and `not_found_what` is given:
///   `NotFound(what)`.
/// - Otherwise: `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<CadenceError>,
    not_found_what: Option<String>,
) -> CadenceError {
    if !attempted_any {
        return CadenceError::unsupported(capability.as_str());
    }
    if every(&errors, |e| matches!(e, CadenceError::ProviderTimeout { .. })) {
        return CadenceError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    match not_found_what {
        Some(what) if every(&errors, |e| matches!(e, CadenceError::NotFound { .. })) => {
            CadenceError::not_found(what)
        }
        _ => CadenceError::AllProvidersFailed(errors),
    }
}

fn every(errors: &[CadenceError], pred: impl Fn(&CadenceError) -> bool) -> bool {
    !errors.is_empty() && errors.iter().all(pred)
}
