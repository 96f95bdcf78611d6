use crate::{BootcampList, BootcampPayload, Credentials, LoginResponse};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The JSON body sent with the request. `()` for bodiless requests.
    type Body: Serialize;
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the bearer token must be attached.
    const AUTHENTICATED: bool;

    /// The URL path, relative to the API base URL.
    fn path(&self) -> String;

    /// The request body, if any.
    fn body(&self) -> Option<&Self::Body>;
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a session token
#[derive(Debug, Clone)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Body = Credentials;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> Option<&Credentials> {
        Some(&self.0)
    }
}

/// Create an account. No token is issued.
#[derive(Debug, Clone)]
pub struct RegisterRequest(pub Credentials);

impl ApiRequest for RegisterRequest {
    type Body = Credentials;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }

    fn body(&self) -> Option<&Credentials> {
        Some(&self.0)
    }
}

/// List all bootcamps, active or not
#[derive(Debug, Clone, Copy)]
pub struct ListBootcampsRequest;

impl ApiRequest for ListBootcampsRequest {
    type Body = ();
    type Response = BootcampList;
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        "/bootcamps/all".to_string()
    }

    fn body(&self) -> Option<&()> {
        None
    }
}

/// Create a bootcamp.
/// The created record is not used: the dashboard always re-fetches the list.
#[derive(Debug, Clone)]
pub struct CreateBootcampRequest(pub BootcampPayload);

impl ApiRequest for CreateBootcampRequest {
    type Body = BootcampPayload;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        "/bootcamps/create".to_string()
    }

    fn body(&self) -> Option<&BootcampPayload> {
        Some(&self.0)
    }
}

/// Replace name, description and technologies of a bootcamp
#[derive(Debug, Clone)]
pub struct UpdateBootcampRequest {
    pub id: String,
    pub payload: BootcampPayload,
}

impl ApiRequest for UpdateBootcampRequest {
    type Body = BootcampPayload;
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Put;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        format!("/bootcamps/update/{}", self.id)
    }

    fn body(&self) -> Option<&BootcampPayload> {
        Some(&self.payload)
    }
}

/// Deactivate a bootcamp. The server keeps the record with `active: false`.
#[derive(Debug, Clone)]
pub struct DeactivateBootcampRequest {
    pub id: String,
}

impl ApiRequest for DeactivateBootcampRequest {
    type Body = ();
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const AUTHENTICATED: bool = true;

    fn path(&self) -> String {
        format!("/bootcamps/delete/{}", self.id)
    }

    fn body(&self) -> Option<&()> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_methods() {
        let update = UpdateBootcampRequest {
            id: "abc".into(),
            payload: BootcampPayload::default(),
        };
        assert_eq!(update.path(), "/bootcamps/update/abc");
        assert_eq!(UpdateBootcampRequest::METHOD, HttpMethod::Put);

        let delete = DeactivateBootcampRequest { id: "abc".into() };
        assert_eq!(delete.path(), "/bootcamps/delete/abc");
        assert!(delete.body().is_none());
        assert_eq!(DeactivateBootcampRequest::METHOD.as_str(), "DELETE");

        assert_eq!(ListBootcampsRequest.path(), "/bootcamps/all");
    }

    #[test]
    fn test_auth_endpoints_are_anonymous() {
        assert!(!LoginRequest::AUTHENTICATED);
        assert!(!RegisterRequest::AUTHENTICATED);
        assert!(ListBootcampsRequest::AUTHENTICATED);
        assert!(CreateBootcampRequest::AUTHENTICATED);
        assert!(UpdateBootcampRequest::AUTHENTICATED);
        assert!(DeactivateBootcampRequest::AUTHENTICATED);
    }
}
