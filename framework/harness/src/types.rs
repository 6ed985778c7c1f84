/// Recommended error type for a scenario `main` function and any shared behaviour code that you
/// write around the harness. This type is compatible with everything the harness returns so you
/// can use `?` to propagate errors.
pub type HarnessResult<T> = anyhow::Result<T>;
