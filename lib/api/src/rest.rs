use crate::checker::{CheckError, Checker};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use trustrank_storage::AddOutcome;

/// Preview length used in HTTP responses
pub const REST_PREVIEW_CHARS: usize = 300;

#[derive(Deserialize)]
struct UrlRequest {
    #[serde(default)]
    url: String,
}

#[derive(Deserialize)]
struct TextRequest {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    articles: usize,
    trusted_sources: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(checker: Arc<Checker>, port: u16) -> std::io::Result<()> {
        let checker = web::Data::from(checker);
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(checker.clone())
                .configure(routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register every endpoint; the app must provide `web::Data<Checker>`
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info))
        .route("/check_url", web::post().to(check_url))
        .route("/check_text", web::post().to(check_text))
        .route("/articles", web::get().to(list_articles))
        .route("/articles", web::post().to(add_article));
}

fn error_response(error: &CheckError) -> HttpResponse {
    let body = serde_json::json!({
        "error": error.to_string()
    });
    match error {
        CheckError::EmptyInput(_) => HttpResponse::BadRequest().json(body),
        CheckError::ExtractionFailed(_) | CheckError::Storage(_) => {
            tracing::warn!(error = %error, "Request failed");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

async fn service_info(checker: web::Data<Checker>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ServiceInfo {
        name: "TrustRank",
        version: env!("CARGO_PKG_VERSION"),
        articles: checker.corpus().len(),
        trusted_sources: checker.allowlist().len(),
    }))
}

async fn check_url(
    checker: web::Data<Checker>,
    req: web::Json<UrlRequest>,
) -> ActixResult<HttpResponse> {
    let (text, trusted) = match checker.fetch_url(&req.url).await {
        Ok(fetched) => fetched,
        Err(e) => return Ok(error_response(&e)),
    };

    let checker = checker.clone();
    let report = web::block(move || checker.analyze(&text, trusted)).await?;
    Ok(HttpResponse::Ok().json(report))
}

async fn check_text(
    checker: web::Data<Checker>,
    req: web::Json<TextRequest>,
) -> ActixResult<HttpResponse> {
    let text = req.into_inner().text;
    let checker = checker.clone();

    match web::block(move || checker.check_text(&text)).await? {
        Ok(report) => Ok(HttpResponse::Ok().json(report)),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn list_articles(checker: web::Data<Checker>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": checker.articles()
    })))
}

async fn add_article(
    checker: web::Data<Checker>,
    req: web::Json<UrlRequest>,
) -> ActixResult<HttpResponse> {
    match checker.add_article(&req.url).await {
        Ok(added) => {
            let result = match added.outcome {
                AddOutcome::Added => "added",
                AddOutcome::AlreadyExists => "exists",
            };
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "result": result,
                "title": added.title
            })))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
