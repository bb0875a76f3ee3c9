//! Client page handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use senti_core::AnalysisResponse;
use tracing::warn;

use super::{example, UiState, EXAMPLES};

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    sentence: String,
    examples: Vec<ExampleView>,
    warning: Option<String>,
    error: Option<String>,
    result: Option<ResultView>,
}

struct ExampleView {
    number: usize,
}

/// View model for a successful analysis.
struct ResultView {
    sentiment: String,
    scores_json: String,
}

impl IndexTemplate {
    fn new(sentence: String) -> Self {
        Self {
            sentence,
            examples: (1..=EXAMPLES.len()).map(|number| ExampleView { number }).collect(),
            warning: None,
            error: None,
            result: None,
        }
    }
}

impl ResultView {
    fn from_response(response: &AnalysisResponse) -> Self {
        Self {
            sentiment: response.sentiment.to_string(),
            scores_json: serde_json::to_string_pretty(&response.scores).unwrap_or_default(),
        }
    }
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct IndexQuery {
    pub example: Option<usize>,
}

#[derive(Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub sentence: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the form, pre-filled when an example was picked.
pub async fn index(Query(query): Query<IndexQuery>) -> Response {
    let sentence = query.example.and_then(example).unwrap_or_default();
    render(IndexTemplate::new(sentence.to_string()))
}

/// POST / - Validate the input locally, then ask the service.
pub async fn submit(State(state): State<UiState>, Form(form): Form<AnalyzeForm>) -> Response {
    let mut page = IndexTemplate::new(form.sentence);

    if page.sentence.trim().is_empty() {
        page.warning = Some("Please enter a sentence to analyze.".to_string());
        return render(page);
    }

    match state.backend.analyze(&page.sentence).await {
        Ok(response) => page.result = Some(ResultView::from_response(&response)),
        Err(e) => {
            warn!(error = %e, "Analyze request failed");
            page.error = Some(format!("Request failed: {:#}", e));
        }
    }

    render(page)
}

fn render(template: IndexTemplate) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::test_support::spawn_service;
    use crate::ui::{create_ui_router, BackendClient, UiState};

    fn app(backend_url: &str) -> Router {
        create_ui_router(UiState::new(BackendClient::new(backend_url)))
    }

    async fn body_text(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn submit(sentence: &str) -> Request<Body> {
        let form = format!("sentence={}", urlencode(sentence));
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap()
    }

    fn urlencode(s: &str) -> String {
        s.bytes()
            .map(|b| match b {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => (b as char).to_string(),
                b' ' => "+".to_string(),
                _ => format!("%{:02X}", b),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_renders_empty_form_with_examples() {
        let request = Request::get("/").body(Body::empty()).unwrap();
        let (status, html) = body_text(app("http://127.0.0.1:1"), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<form"));
        assert!(html.contains("href=\"/?example=1\""));
        assert!(html.contains("href=\"/?example=3\""));
        assert!(!html.contains("Sentiment:"));
    }

    #[tokio::test]
    async fn test_example_prefills_without_submitting() {
        let request = Request::get("/?example=2").body(Body::empty()).unwrap();
        let (status, html) = body_text(app("http://127.0.0.1:1"), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("This is the worst experience"));
        assert!(!html.contains("Sentiment:"));
        assert!(!html.contains("Request failed"));
    }

    #[tokio::test]
    async fn test_unknown_example_renders_empty_form() {
        let request = Request::get("/?example=9").body(Body::empty()).unwrap();
        let (status, html) = body_text(app("http://127.0.0.1:1"), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("This is the worst experience I"));
    }

    #[tokio::test]
    async fn test_blank_input_warns_without_calling_service() {
        // Unreachable backend: any call would surface as "Request failed".
        let (status, html) = body_text(app("http://127.0.0.1:1"), submit("   ")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Please enter a sentence to analyze."));
        assert!(!html.contains("Request failed"));
    }

    #[tokio::test]
    async fn test_submit_shows_label_and_scores() {
        let base = spawn_service().await;
        let (status, html) = body_text(app(&base), submit("I absolutely love this product!")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Sentiment: <strong>Positive</strong>"), "{}", html);
        assert!(html.contains("compound"));
        assert!(html.contains(">I absolutely love this product!</textarea>"));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_inline_error() {
        let (status, html) = body_text(app("http://127.0.0.1:1"), submit("good")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Request failed:"));
        assert!(!html.contains("Sentiment:"));
    }
}
