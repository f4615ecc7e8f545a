//! Export endpoints.
//!
//! ```text
//! GET /export_data/{format}   fixed two-person demo dataset
//! GET /export/{format}        last generated batch
//! ```

use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};
use coffee_data::{Batch, ExportArtifact, ExportFormat, demo_batch, export};
use tracing::info;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

fn attachment(artifact: ExportArtifact) -> HttpResponse {
    let disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(artifact.file_name())],
    };
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, artifact.mime_type()))
        .insert_header(disposition)
        .body(artifact.into_bytes())
}

fn export_batch(batch: &Batch, format: ExportFormat) -> ApiResult<HttpResponse> {
    let artifact = export(batch, format)?;
    info!(
        format = %format,
        records = batch.len(),
        bytes = artifact.bytes().len(),
        "served export"
    );
    Ok(attachment(artifact))
}

/// Export the demo dataset `[{name: Alice, age: 25}, {name: Bob, age: 30}]`.
#[utoipa::path(
    get,
    path = "/export_data/{format}",
    params(("format" = String, Path, description = "json, csv, xlsx, xml or txt")),
    responses(
        (
            status = 200,
            description = "Exported demo dataset as an attachment named data.<ext>",
            headers(("Content-Disposition" = String, description = "attachment; filename=\"data.<ext>\""))
        ),
        (status = 400, description = "Unsupported export format", body = ErrorSchema),
        (status = 405, description = "Method not allowed")
    ),
    tags = ["export"],
    operation_id = "exportDemoData"
)]
pub async fn export_demo(path: web::Path<String>) -> ApiResult<HttpResponse> {
    let format: ExportFormat = path.parse()?;
    export_batch(&demo_batch(), format)
}

/// Export the batch produced by the most recent generate request.
#[utoipa::path(
    get,
    path = "/export/{format}",
    params(("format" = String, Path, description = "json, csv, xlsx, xml or txt")),
    responses(
        (
            status = 200,
            description = "Exported batch as an attachment named data.<ext>",
            headers(("Content-Disposition" = String, description = "attachment; filename=\"data.<ext>\""))
        ),
        (status = 400, description = "Unsupported export format", body = ErrorSchema),
        (status = 404, description = "Nothing has been generated yet", body = ErrorSchema),
        (status = 405, description = "Method not allowed")
    ),
    tags = ["export"],
    operation_id = "exportLastBatch"
)]
pub async fn export_last(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let format: ExportFormat = path.parse()?;
    let batch = state
        .last_batch
        .snapshot()
        .ok_or_else(|| Error::not_found("no batch has been generated yet"))?;
    export_batch(&batch, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use coffee_data::{DataType, GenerationOptions, RecordCount, generate_batch};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn get(state: web::Data<HttpState>, uri: &str) -> (StatusCode, String, String, Vec<u8>) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/export_data/{format}", web::get().to(export_demo))
                .route("/export/{format}", web::get().to(export_last)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let header_text = |name: header::HeaderName| {
            res.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_owned()
        };
        let content_type = header_text(header::CONTENT_TYPE);
        let disposition = header_text(header::CONTENT_DISPOSITION);
        let status = res.status();
        let body = test::read_body(res).await.to_vec();
        (status, content_type, disposition, body)
    }

    #[rstest]
    #[case("json", "application/json", "data.json")]
    #[case("csv", "text/csv; charset=utf-8", "data.csv")]
    #[case(
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "data.xlsx"
    )]
    #[case("xml", "application/xml", "data.xml")]
    #[case("txt", "text/plain; charset=utf-8", "data.txt")]
    #[actix_web::test]
    async fn demo_export_sets_delivery_headers(
        #[case] format: &str,
        #[case] mime: &str,
        #[case] file_name: &str,
    ) {
        let (status, content_type, disposition, body) = get(
            web::Data::new(test_state()),
            &format!("/export_data/{format}"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, mime);
        assert_eq!(disposition, format!("attachment; filename=\"{file_name}\""));
        assert!(!body.is_empty());
    }

    #[rstest]
    #[actix_web::test]
    async fn demo_json_holds_alice_and_bob() {
        let (_, _, _, body) = get(web::Data::new(test_state()), "/export_data/json").await;
        let parsed: Value = serde_json::from_slice(&body).expect("json body");

        assert_eq!(
            parsed,
            json!([{"name": "Alice", "age": 25}, {"name": "Bob", "age": 30}])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn demo_csv_lists_both_rows() {
        let (_, _, _, body) = get(web::Data::new(test_state()), "/export_data/csv").await;
        assert_eq!(body, b"name,age\nAlice,25\nBob,30\n");
    }

    #[rstest]
    #[case("/export_data/pdf")]
    #[case("/export/pdf")]
    #[actix_web::test]
    async fn unsupported_formats_are_client_errors(#[case] uri: &str) {
        let (status, _, _, body) = get(web::Data::new(test_state()), uri).await;
        let parsed: Value = serde_json::from_slice(&body).expect("error body");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parsed.pointer("/details/field"), Some(&json!("format")));
    }

    #[rstest]
    #[actix_web::test]
    async fn last_batch_export_needs_a_batch() {
        let (status, _, _, body) = get(web::Data::new(test_state()), "/export/json").await;
        let parsed: Value = serde_json::from_slice(&body).expect("error body");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(parsed.get("code"), Some(&json!("not_found")));
    }

    #[rstest]
    #[actix_web::test]
    async fn last_batch_export_serves_the_stored_batch() {
        let state = web::Data::new(test_state());
        let count = RecordCount::new(3, 10).expect("count in range");
        state
            .last_batch
            .store(generate_batch(DataType::Order, count, &GenerationOptions::default()));

        let (status, _, _, body) = get(state, "/export/csv").await;
        let csv = String::from_utf8(body).expect("utf-8 csv");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(csv.lines().next(), Some("produkt,menge,preis"));
        assert_eq!(csv.lines().count(), 4);
    }
}
