use serde::Serialize;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// This struct enforces a consistent response structure across all endpoints:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// - `T` is the type of the `data` payload.
/// - `success` is a boolean indicating operation status.
/// - `count` is present only on list responses and carries the result size.
/// - `message` provides a human-readable context string.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: None,
            data,
            message: message.into(),
        }
    }

    /// Constructs a success response for list operations, carrying the
    /// number of matching records alongside the data.
    pub fn success_with_count(data: T, count: u64, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: Some(count),
            data,
            message: message.into(),
        }
    }

    /// Constructs an error response with a message and default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            count: None,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// Placeholder payload serializing as `{}`, used for error envelopes and
/// delete responses that carry no data.
#[derive(Serialize, Default)]
pub struct Empty {}
