//! `AuthUser` extractor: reads the identity headers set by the
//! authentication platform in front of this service.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crewboard_core::error::AppError;
use crewboard_core::types::id::UserId;
use crewboard_entity::user::UserRole;
use crewboard_service::context::RequestContext;

use crate::error::ApiError;

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the caller's role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, USER_ID_HEADER)
            .ok_or_else(|| AppError::authentication("Missing x-user-id header"))?
            .parse::<Uuid>()
            .map_err(|_| AppError::authentication("Invalid x-user-id header"))?;

        let role = header(parts, USER_ROLE_HEADER)
            .ok_or_else(|| AppError::authentication("Missing x-user-role header"))?
            .parse::<UserRole>()
            .map_err(|_| AppError::authentication("Invalid x-user-role header"))?;

        Ok(Self(RequestContext::new(UserId::from_uuid(user_id), role)))
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use crewboard_core::error::ErrorKind;

    use super::*;

    async fn extract(headers: &[(&str, &str)]) -> Result<AuthUser, ApiError> {
        let mut builder = Request::builder().uri("/api/jobs");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (mut parts, _) = builder.body(()).expect("request").into_parts();
        AuthUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_legacy_employee_role_maps_to_crew() {
        let id = Uuid::new_v4();
        let raw = id.to_string();
        let auth = extract(&[(USER_ID_HEADER, raw.as_str()), (USER_ROLE_HEADER, "employee")])
            .await
            .expect("authenticated");

        assert_eq!(auth.role, UserRole::Crew);
        assert_eq!(auth.user_id, UserId::from_uuid(id));
    }

    #[tokio::test]
    async fn test_missing_or_invalid_headers_are_rejected() {
        let err = extract(&[(USER_ROLE_HEADER, "admin")]).await.unwrap_err();
        assert_eq!(err.0.kind, ErrorKind::Authentication);

        let err = extract(&[(USER_ID_HEADER, "not-a-uuid"), (USER_ROLE_HEADER, "admin")])
            .await
            .unwrap_err();
        assert_eq!(err.0.kind, ErrorKind::Authentication);

        let raw = Uuid::new_v4().to_string();
        let err = extract(&[(USER_ID_HEADER, raw.as_str()), (USER_ROLE_HEADER, "superuser")])
            .await
            .unwrap_err();
        assert_eq!(err.0.kind, ErrorKind::Authentication);
    }
}
