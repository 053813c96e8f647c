#[cfg(test)]
mod tests {
    use crate::error::{AppError, AppResult, OptionExt};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_display() {
        let error = AppError::BadRequest("Invalid input".to_string());
        assert_eq!(format!("{}", error), "Bad request: Invalid input");

        let error = AppError::NotFound("Resource not found".to_string());
        assert_eq!(format!("{}", error), "Not found: Resource not found");

        let error = AppError::Database("boom".to_string());
        assert_eq!(format!("{}", error), "Database error: boom");
    }

    #[test]
    fn test_app_error_into_response() {
        let error = AppError::BadRequest("Test error".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = AppError::NotFound("Not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error = AppError::ServiceUnavailable("Service down".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let error = AppError::Database("boom".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = AppError::InvalidInput("bad".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = AppError::Internal(anyhow::anyhow!("unexpected"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_sqlx_error() {
        let app_error: AppError = sqlx::Error::RowNotFound.into();
        match app_error {
            AppError::NotFound(msg) => assert_eq!(msg, "Record not found"),
            _ => panic!("Expected NotFound variant"),
        }

        let app_error: AppError = sqlx::Error::PoolTimedOut.into();
        match app_error {
            AppError::ServiceUnavailable(_) => {}
            _ => panic!("Expected ServiceUnavailable variant"),
        }
    }

    #[test]
    fn test_option_ext() {
        let some_value: Option<i32> = Some(42);
        let result: AppResult<i32> = some_value.ok_or_not_found("test entity");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);

        let none_value: Option<i32> = None;
        let result: AppResult<i32> = none_value.ok_or_not_found("test entity");
        assert!(result.is_err());

        match result.unwrap_err() {
            AppError::NotFound(msg) => {
                assert_eq!(msg, "test entity not found");
            }
            _ => panic!("Expected NotFound error"),
        }
    }
}
