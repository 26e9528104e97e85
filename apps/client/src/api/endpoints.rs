//! Endpoint descriptors for the remote resume review API, relative to the
//! configured versioned base URL.

use reqwest::Method;

/// An endpoint descriptor: HTTP method plus path relative to the API base.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

/// `GET resume-reviews` — filtered by `state` and `reviewer` query params.
pub fn get_resume_reviews() -> Endpoint {
    Endpoint::new(Method::GET, "resume-reviews")
}

/// `PATCH resume-reviews/{id}/claim`
pub fn claim_resume_review(resume_review_id: &str) -> Endpoint {
    Endpoint::new(
        Method::PATCH,
        format!(
            "resume-reviews/{}/claim",
            urlencoding::encode(resume_review_id)
        ),
    )
}

/// `PATCH resume-reviews/{id}/unclaim`
pub fn unclaim_resume_review(resume_review_id: &str) -> Endpoint {
    Endpoint::new(
        Method::PATCH,
        format!(
            "resume-reviews/{}/unclaim",
            urlencoding::encode(resume_review_id)
        ),
    )
}

/// `POST resume-reviews` — initiates a review from an uploaded document.
pub fn initiate_resume_review() -> Endpoint {
    Endpoint::new(Method::POST, "resume-reviews")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_path_percent_encodes_the_id() {
        let endpoint = claim_resume_review("rr/1 a");
        assert_eq!(endpoint.method, Method::PATCH);
        assert_eq!(endpoint.path, "resume-reviews/rr%2F1%20a/claim");
    }
}
