//! OpenAPI documentation aggregator, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "docsum API",
        version = "0.1.0",
        description = "Extractive summaries and key points for PDF, image, and text documents.",
    ),
    tags(
        (name = "Health", description = "Service readiness"),
        (name = "Summarize", description = "Document upload and extractive summarization"),
    ),
    paths(
        crate::api::health::health,
        crate::api::summarize::summarize,
    ),
    components(schemas(
        crate::api::health::HealthResponse,
        docsum_core::SummarizeResponse,
    ))
)]
pub struct ApiDoc;
