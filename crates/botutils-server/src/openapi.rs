//! OpenAPI document served at `/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::api::OutputUnit;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BotUtils API",
        version = "1.0.0",
        description = "GitHub Repository: https://github.com/DerBanko/BotUtils"
    ),
    paths(crate::api::relative_time),
    components(schemas(ErrorBody, OutputUnit)),
    tags((name = "relative-time", description = "Distance between a civil date and now"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn document() -> Value {
        serde_json::to_value(ApiDoc::openapi()).unwrap()
    }

    #[test]
    fn test_document_header() {
        let doc = document();
        assert!(doc["openapi"].as_str().unwrap().starts_with("3.1"));
        assert_eq!(doc["info"]["title"], "BotUtils API");
        assert_eq!(doc["info"]["version"], "1.0.0");
    }

    #[test]
    fn test_relative_time_parameters() {
        let doc = document();
        let params = doc["paths"]["/relative-time"]["get"]["parameters"]
            .as_array()
            .unwrap();
        let required = |name: &str| {
            params
                .iter()
                .find(|p| p["name"] == name)
                .map(|p| p["required"] == true)
                .unwrap()
        };
        assert!(required("date"));
        assert!(!required("timezone"));
        assert!(required("output"));
    }

    #[test]
    fn test_timezone_defaults_to_berlin() {
        let doc = document();
        let params = doc["paths"]["/relative-time"]["get"]["parameters"]
            .as_array()
            .unwrap();
        let timezone = params.iter().find(|p| p["name"] == "timezone").unwrap();
        assert_eq!(timezone["schema"]["default"], "Europe/Berlin");
        let date = params.iter().find(|p| p["name"] == "date").unwrap();
        assert!(date["description"].as_str().unwrap().contains("2026-01-01 14:30:45"));
    }

    #[test]
    fn test_output_enum_lists_every_token() {
        let doc = document();
        let tokens = doc["components"]["schemas"]["OutputUnit"]["enum"]
            .as_array()
            .unwrap();
        assert_eq!(tokens.len(), relative_time::TimeUnit::TOKENS.len());
        for token in relative_time::TimeUnit::TOKENS {
            assert!(tokens.iter().any(|t| t == token), "missing {token}");
        }
    }

    #[test]
    fn test_responses_declared() {
        let doc = document();
        let responses = &doc["paths"]["/relative-time"]["get"]["responses"];
        assert!(responses["200"]["content"]["text/plain"].is_object());
        assert!(responses["400"]["content"]["application/json"].is_object());
    }
}
