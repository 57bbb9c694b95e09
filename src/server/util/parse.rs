use crate::server::error::AppError;

/// Parses a path identifier into a primary key.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `label` - Entity name used in the error message, e.g. `"post"`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed positive id
/// - `Err(AppError::BadRequest)` - `"Invalid {label} ID"` when the segment is not a
///   positive integer
pub fn parse_id(value: &str, label: &str) -> Result<i32, AppError> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid {} ID", label))),
    }
}
