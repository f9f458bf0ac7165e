//! Conversion HTTP surface
//!
//! Thin "offer as download" collaborator over the conversion use case:
//! - POST /api/convert: raw CSV body + query-string options -> ZIP download
//! - GET /api/logs: bounded in-memory log ring

use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::application::use_cases::converter::CsvToTextConverter;
use crate::domain::error::AppError;
use crate::domain::table::{
    ConversionOptions, ConversionOutcome, DelimiterChoice, EncodingChoice, TextMode,
};

/// Fixed download name handed to the client with the archive
pub const ARCHIVE_DOWNLOAD_NAME: &str = "texts_from_csv.zip";

/// MIME type of the archive response
pub const ARCHIVE_MIME: &str = "application/zip";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

/// Query-string options for one conversion request
#[derive(Debug, Default, Deserialize)]
pub struct ConvertRequest {
    #[serde(default)]
    pub text_mode: Option<String>,
    #[serde(default)]
    pub text_column: Option<String>,
    #[serde(default)]
    pub filename_column: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl ConvertRequest {
    /// Map the wire request onto domain options. The literal "none" and the
    /// empty string mean an unset filename column; "auto" means probing.
    fn into_options(self) -> Result<ConversionOptions, AppError> {
        let text_mode = match self.text_mode.as_deref() {
            None | Some("") | Some("first_non_empty_text") => TextMode::FirstNonEmptyText,
            Some("named_column") => TextMode::NamedColumn,
            Some(other) => {
                return Err(AppError::ConfigError(format!("unknown text_mode: {}", other)))
            }
        };

        let filename_column = self
            .filename_column
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("none"));

        let encoding = match self.encoding.as_deref() {
            None | Some("") | Some("auto") => EncodingChoice::Auto,
            Some(label) => EncodingChoice::Named(label.to_string()),
        };

        let delimiter = match self.delimiter.as_deref() {
            None | Some("") | Some("auto") => DelimiterChoice::Auto,
            Some("\\t") | Some("tab") => DelimiterChoice::Char('\t'),
            Some(other) => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(delimiter), None) => DelimiterChoice::Char(delimiter),
                    _ => {
                        return Err(AppError::ConfigError(format!(
                            "delimiter must be a single character, got '{}'",
                            other
                        )))
                    }
                }
            }
        };

        Ok(ConversionOptions {
            text_mode,
            text_column: self.text_column,
            filename_column,
            prefix: self.prefix.unwrap_or_default(),
            suffix: self.suffix.unwrap_or_default(),
            encoding,
            delimiter,
        })
    }
}

#[post("/convert")]
async fn convert(
    data: web::Data<HttpState>,
    query: web::Query<ConvertRequest>,
    body: web::Bytes,
) -> impl Responder {
    add_log(
        &data.logs,
        "INFO",
        "Convert",
        &format!("Converting CSV upload ({} bytes)", body.len()),
    );

    let options = match query.into_inner().into_options() {
        Ok(options) => options,
        Err(error) => {
            add_log(
                &data.logs,
                "ERROR",
                "Convert",
                &format!("Rejected request: {}", error),
            );
            return HttpResponse::BadRequest().body(error.to_string());
        }
    };

    match CsvToTextConverter::new(options).convert(&body) {
        Ok(ConversionOutcome::Archive(result)) => {
            add_log(
                &data.logs,
                "INFO",
                "Convert",
                &format!(
                    "Created {} files from {} rows (encoding={}, {}ms)",
                    result.files_created,
                    result.rows_processed,
                    result.encoding_used,
                    result.processing_time_ms
                ),
            );
            HttpResponse::Ok()
                .content_type(ARCHIVE_MIME)
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", ARCHIVE_DOWNLOAD_NAME),
                ))
                .insert_header(("X-Rows-Processed", result.rows_processed.to_string()))
                .insert_header(("X-Files-Created", result.files_created.to_string()))
                .body(result.archive)
        }
        Ok(ConversionOutcome::EmptyTable) => {
            add_log(&data.logs, "WARN", "Convert", "CSV contains no data rows");
            HttpResponse::Ok().json(serde_json::json!({
                "status": "empty_table",
                "message": "CSV contains no data rows; no archive produced",
            }))
        }
        Err(error) => {
            add_log(
                &data.logs,
                "ERROR",
                "Convert",
                &format!("Conversion failed: {}", error),
            );
            match &error {
                AppError::ConfigError(_) => HttpResponse::BadRequest().body(error.to_string()),
                AppError::EncodingError(_) | AppError::ParseError(_) => {
                    HttpResponse::UnprocessableEntity().body(error.to_string())
                }
                _ => HttpResponse::InternalServerError().body(error.to_string()),
            }
        }
    }
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap();
    HttpResponse::Ok().json(&*logs)
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

pub fn start_server(logs: Arc<Mutex<Vec<LogEntry>>>) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState { logs });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(web::scope("/api").service(convert).service(get_logs))
    })
    .bind(("127.0.0.1", 3001))?
    .run();

    Ok(server)
}
