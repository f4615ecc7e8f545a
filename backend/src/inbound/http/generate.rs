//! Batch generation endpoints.
//!
//! ```text
//! GET /generate/{data_type}/{count}
//! GET /generate/{data_type}?count=25&valid=false&locale=en_US&city=Berlin
//! ```
//!
//! Both forms return the batch as a JSON array and remember it as the last
//! generated batch. Path and query values arrive as raw strings so a
//! non-integer count is reported as `unprocessable_entity` rather than being
//! swallowed by the extractor.

use std::num::IntErrorKind;
use std::str::FromStr;

use actix_web::{HttpResponse, web};
use coffee_data::{
    Batch, City, Country, DataType, GenerationOptions, Locale, OrderExtra, OrderOptions,
    RecordCount, Validity, generate_batch,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::IntoParams;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RecordSchema};
use crate::inbound::http::state::HttpState;

/// Optional generation knobs accepted by both generate forms.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerationQuery {
    /// `false` produces deliberately invalid credentials.
    #[param(example = "true")]
    pub valid: Option<String>,
    /// Locale code such as `de_DE` or `fr`.
    #[param(example = "de_DE")]
    pub locale: Option<String>,
    /// Pin every record to a catalogue city.
    #[param(example = "Berlin")]
    pub city: Option<String>,
    /// Pin every record to a catalogue country.
    #[param(example = "Deutschland")]
    pub country: Option<String>,
    /// Extra order field: `rabatt`, `versandkosten` or `geschenk`.
    #[param(example = "rabatt")]
    pub extra: Option<String>,
    /// Append the customer block to orders.
    #[param(example = "false")]
    pub customer: Option<String>,
    /// Seed for a reproducible batch.
    #[param(example = "42")]
    pub seed: Option<String>,
}

/// Query string of `GET /generate/{data_type}`.
#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    count: Option<String>,
    #[serde(flatten)]
    options: GenerationQuery,
}

fn parse_count(raw: Option<&str>, max: u32) -> ApiResult<RecordCount> {
    let value = raw.ok_or_else(|| {
        Error::unprocessable("missing query parameter 'count'")
            .with_details(json!({ "field": "count", "code": "missing" }))
    })?;
    let requested = match value.trim().parse::<i64>() {
        Ok(requested) => requested,
        Err(err)
            if matches!(
                err.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) =>
        {
            return Err(Error::invalid_request(format!(
                "record count {} is outside the accepted range 1..={max}",
                value.trim()
            ))
            .with_details(json!({ "field": "count" })));
        }
        Err(_) => {
            return Err(
                Error::unprocessable(format!("count must be an integer, got '{value}'"))
                    .with_details(json!({ "field": "count", "code": "not_an_integer" })),
            );
        }
    };
    Ok(RecordCount::new(requested, max)?)
}

fn parse_flag(field: &str, raw: Option<&str>) -> ApiResult<Option<bool>> {
    raw.map(|value| match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(
            Error::unprocessable(format!("{field} must be a boolean, got '{value}'"))
                .with_details(json!({ "field": field, "code": "not_a_boolean" })),
        ),
    })
    .transpose()
}

fn parse_optional<T>(raw: Option<&str>) -> ApiResult<Option<T>>
where
    T: FromStr,
    Error: From<T::Err>,
{
    raw.map(str::parse::<T>).transpose().map_err(Error::from)
}

impl GenerationQuery {
    fn options(&self, default_locale: Locale) -> ApiResult<GenerationOptions> {
        let seed = self
            .seed
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    Error::unprocessable(format!("seed must be an unsigned integer, got '{raw}'"))
                        .with_details(json!({ "field": "seed", "code": "not_an_integer" }))
                })
            })
            .transpose()?;
        let validity = parse_flag("valid", self.valid.as_deref())?
            .map_or_else(Validity::default, Validity::from_flag);
        let with_customer = parse_flag("customer", self.customer.as_deref())?.unwrap_or(false);
        let locale =
            parse_optional::<Locale>(self.locale.as_deref())?.unwrap_or(default_locale);

        Ok(GenerationOptions {
            locale,
            validity,
            city: parse_optional::<City>(self.city.as_deref())?,
            country: parse_optional::<Country>(self.country.as_deref())?,
            order: OrderOptions {
                with_customer,
                extra: parse_optional::<OrderExtra>(self.extra.as_deref())?,
            },
            seed,
        })
    }
}

fn generate(
    state: &HttpState,
    raw_type: &str,
    raw_count: Option<&str>,
    query: &GenerationQuery,
) -> ApiResult<HttpResponse> {
    let count = parse_count(raw_count, state.max_records)?;
    let data_type: DataType = raw_type.parse()?;
    let options = query.options(state.default_locale)?;

    let batch: Batch = generate_batch(data_type, count, &options);
    let stored = state.last_batch.store(batch);
    info!(
        data_type = %data_type,
        count = count.get(),
        locale = %options.locale,
        valid = options.validity.is_valid(),
        "generated batch"
    );
    Ok(HttpResponse::Ok().json(&*stored))
}

/// Generate `count` records of `data_type`.
#[utoipa::path(
    get,
    path = "/generate/{data_type}/{count}",
    params(
        ("data_type" = String, Path, description = "registrierung, login, profil or bestellung (aliases registration, profile, order)"),
        ("count" = i64, Path, description = "Number of records, 1 to the configured maximum"),
        GenerationQuery
    ),
    responses(
        (status = 200, description = "Generated records", body = [RecordSchema]),
        (status = 400, description = "Unknown data type, option value or count out of range", body = ErrorSchema),
        (status = 405, description = "Method not allowed"),
        (status = 422, description = "Count is not an integer", body = ErrorSchema)
    ),
    tags = ["generate"],
    operation_id = "generateByPath"
)]
pub async fn generate_by_path(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    query: web::Query<GenerationQuery>,
) -> ApiResult<HttpResponse> {
    let (data_type, count) = path.into_inner();
    generate(&state, &data_type, Some(count.as_str()), &query)
}

/// Generate records of `data_type`, taking the count from the query string.
#[utoipa::path(
    get,
    path = "/generate/{data_type}",
    params(
        ("data_type" = String, Path, description = "registrierung, login, profil or bestellung (aliases registration, profile, order)"),
        ("count" = i64, Query, description = "Number of records, 1 to the configured maximum"),
        GenerationQuery
    ),
    responses(
        (status = 200, description = "Generated records", body = [RecordSchema]),
        (status = 400, description = "Unknown data type, option value or count out of range", body = ErrorSchema),
        (status = 405, description = "Method not allowed"),
        (status = 422, description = "Count is missing or not an integer", body = ErrorSchema)
    ),
    tags = ["generate"],
    operation_id = "generateByQuery"
)]
pub async fn generate_by_query(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<CountQuery>,
) -> ApiResult<HttpResponse> {
    let CountQuery { count, options } = query.into_inner();
    generate(&state, &path, count.as_deref(), &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::inbound::http::test_utils::{test_state, unwrap_json};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::Value;

    async fn call(state: web::Data<HttpState>, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/generate/{data_type}/{count}", web::get().to(generate_by_path))
                .route("/generate/{data_type}", web::get().to(generate_by_query)),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        unwrap_json(res).await
    }

    #[rstest]
    #[case("/generate/login/3", 3, &["benutzername", "passwort"])]
    #[case("/generate/registration/2", 2, &["benutzername", "passwort", "passwort_wiederholen", "agb_akzeptieren"])]
    #[case("/generate/bestellung?count=4", 4, &["produkt", "menge", "preis"])]
    #[case("/generate/order?count=1&extra=rabatt", 1, &["produkt", "menge", "preis", "rabatt"])]
    #[actix_web::test]
    async fn returns_the_requested_records(
        #[case] uri: &str,
        #[case] expected_len: usize,
        #[case] fields: &[&str],
    ) {
        let (status, body) = call(web::Data::new(test_state()), uri).await;

        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().expect("array body");
        assert_eq!(records.len(), expected_len);
        let mut expected_keys = fields.to_vec();
        expected_keys.sort_unstable();
        for record in records {
            let mut keys: Vec<&str> = record
                .as_object()
                .expect("record object")
                .keys()
                .map(String::as_str)
                .collect();
            keys.sort_unstable();
            assert_eq!(keys, expected_keys);
        }
    }

    #[rstest]
    #[case("/generate/login/0", StatusCode::BAD_REQUEST, "count")]
    #[case("/generate/login/-5", StatusCode::BAD_REQUEST, "count")]
    #[case("/generate/login/10001", StatusCode::BAD_REQUEST, "count")]
    #[case("/generate/login/99999999999999999999", StatusCode::BAD_REQUEST, "count")]
    #[case("/generate/login?count=-99999999999999999999", StatusCode::BAD_REQUEST, "count")]
    #[case("/generate/kunde/5", StatusCode::BAD_REQUEST, "data_type")]
    #[case("/generate/login/drei", StatusCode::UNPROCESSABLE_ENTITY, "count")]
    #[case("/generate/login", StatusCode::UNPROCESSABLE_ENTITY, "count")]
    #[case("/generate/profil?count=2&locale=xx", StatusCode::BAD_REQUEST, "locale")]
    #[case("/generate/profil?count=2&city=Paris", StatusCode::BAD_REQUEST, "city")]
    #[case("/generate/profil?count=2&country=Mars", StatusCode::BAD_REQUEST, "country")]
    #[case("/generate/order?count=2&extra=tip", StatusCode::BAD_REQUEST, "extra")]
    #[case("/generate/login?count=2&valid=vielleicht", StatusCode::UNPROCESSABLE_ENTITY, "valid")]
    #[actix_web::test]
    async fn rejects_bad_requests(
        #[case] uri: &str,
        #[case] expected_status: StatusCode,
        #[case] field: &str,
    ) {
        let state = web::Data::new(test_state());
        let (status, body) = call(state.clone(), uri).await;

        assert_eq!(status, expected_status);
        assert_eq!(body.pointer("/details/field"), Some(&json!(field)));
        assert!(state.last_batch.snapshot().is_none());
    }

    #[rstest]
    #[actix_web::test]
    async fn non_integer_count_wins_over_unknown_type() {
        let (status, body) = call(web::Data::new(test_state()), "/generate/kunde/viele").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: Error = serde_json::from_value(body).expect("error payload");
        assert_eq!(error.code(), ErrorCode::UnprocessableEntity);
    }

    #[rstest]
    #[actix_web::test]
    async fn pins_city_and_country() {
        let (status, body) = call(
            web::Data::new(test_state()),
            "/generate/profil?count=3&city=Hamburg&country=Schweiz",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        for record in body.as_array().expect("array body") {
            assert_eq!(record.get("stadt"), Some(&json!("Hamburg")));
            assert_eq!(record.get("land"), Some(&json!("Schweiz")));
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn seeded_requests_repeat() {
        let state = web::Data::new(test_state());
        let (_, first) = call(state.clone(), "/generate/profil/5?seed=7").await;
        let (_, second) = call(state, "/generate/profil/5?seed=7").await;

        assert_eq!(first, second);
    }

    #[rstest]
    #[actix_web::test]
    async fn stores_the_last_batch() {
        let state = web::Data::new(test_state());
        let (_, body) = call(state.clone(), "/generate/login/2").await;

        let stored = state.last_batch.snapshot().expect("batch stored");
        assert_eq!(serde_json::to_value(stored.as_ref()).expect("serialise"), body);
    }

    #[rstest]
    #[actix_web::test]
    async fn honours_the_configured_maximum() {
        let state = web::Data::new(test_state().with_max_records(10));
        let (ok, _) = call(state.clone(), "/generate/login/10").await;
        let (too_many, body) = call(state, "/generate/login/11").await;

        assert_eq!(ok, StatusCode::OK);
        assert_eq!(too_many, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.get("message"),
            Some(&json!("record count 11 is outside the accepted range 1..=10"))
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn overflowing_counts_are_out_of_range_not_unparseable() {
        let (status, body) = call(
            web::Data::new(test_state()),
            "/generate/login/99999999999999999999",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.get("code"), Some(&json!("invalid_request")));
        assert_eq!(
            body.get("message"),
            Some(&json!(
                "record count 99999999999999999999 is outside the accepted range 1..=10000"
            ))
        );
    }
}
