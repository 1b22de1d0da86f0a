use actix_multipart::Multipart;
use actix_web::http::header::ContentDisposition;
use actix_web::{web, HttpResponse, ResponseError};
use futures_util::TryStreamExt;
use serde::Serialize;
use tracing::error;

use crate::config::Config;
use crate::core::{AppError, Result};
use crate::modules::reports::services::{formatter, schema, ProcessedReport, ReportService};

/// Multipart field carrying the uploaded export
const UPLOAD_FIELD: &str = "file";

/// Upload page served at the root, mirroring the columns the export must
/// carry so the user can fix a rejected file without reading API docs
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="it">
<head>
<meta charset="utf-8">
<title>Processore CSV Vendite</title>
</head>
<body>
<h1>Processore CSV Vendite</h1>
<h3>Istruzioni:</h3>
<ol>
<li>Carica un file CSV che usa ';' come separatore</li>
<li>Il file deve contenere le seguenti colonne:
<ul>
<li>Paese</li>
<li>% IVA applicata</li>
<li>Rate Name</li>
<li>Totale vendite lordo</li>
<li>Totale netto prodotti</li>
<li>Totale netto spedizioni</li>
<li>Totale IVA prodotti</li>
<li>Totale IVA spedizioni</li>
<li>Totale IVA</li>
</ul>
</li>
</ol>
<form action="/reports/sales" method="post" enctype="multipart/form-data">
<input type="file" name="file" accept=".csv" required>
<button type="submit">Scarica il file elaborato</button>
</form>
</body>
</html>
"#;

/// Response structure for the preview endpoint: the aggregated table with
/// locale-formatted cells, plus the CSV text so one upload feeds both the
/// results area and the download action
#[derive(Debug, Serialize)]
pub struct SummaryPreviewResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
    pub filename: String,
    pub csv: String,
}

impl From<ProcessedReport> for SummaryPreviewResponse {
    fn from(processed: ProcessedReport) -> Self {
        Self {
            columns: schema::output_columns(),
            rows: formatter::format_rows(&processed.report),
            row_count: processed.report.country_count(),
            filename: formatter::OUTPUT_FILENAME.to_string(),
            csv: processed.csv,
        }
    }
}

/// GET /
///
/// Static upload form posting straight to the download endpoint.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// POST /reports/sales
///
/// Accepts a multipart CSV upload and responds with the aggregated file as
/// a `text/csv` attachment named `risultati_elaborati.csv`.
pub async fn download_summary(config: web::Data<Config>, payload: Multipart) -> HttpResponse {
    match handle_upload(config, payload).await {
        Ok(processed) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition::attachment(formatter::OUTPUT_FILENAME))
            .body(processed.csv),
        Err(e) => {
            error!("Failed to process sales upload: {}", e);
            e.error_response()
        }
    }
}

/// POST /reports/sales/preview
///
/// Same ingestion as the download endpoint, but responds with a JSON
/// rendering of the aggregated table for the results area.
pub async fn preview_summary(config: web::Data<Config>, payload: Multipart) -> HttpResponse {
    match handle_upload(config, payload).await {
        Ok(processed) => HttpResponse::Ok().json(SummaryPreviewResponse::from(processed)),
        Err(e) => {
            error!("Failed to process sales upload: {}", e);
            e.error_response()
        }
    }
}

async fn handle_upload(config: web::Data<Config>, payload: Multipart) -> Result<ProcessedReport> {
    let bytes = read_upload(payload, config.upload.max_upload_bytes).await?;

    ReportService::new().process(&bytes)
}

/// Drain the multipart stream and collect the upload field's bytes, bounded
/// by the configured limit
async fn read_upload(mut payload: Multipart, limit: usize) -> Result<Vec<u8>> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::upload(format!("malformed multipart payload: {}", e)))?
    {
        if field.name() != UPLOAD_FIELD {
            // Drain unrelated fields so the stream can move on
            while field
                .try_next()
                .await
                .map_err(|e| AppError::upload(format!("failed to read upload: {}", e)))?
                .is_some()
            {}
            continue;
        }

        let mut buf = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::upload(format!("failed to read uploaded file: {}", e)))?
        {
            if buf.len() + chunk.len() > limit {
                return Err(AppError::upload(format!(
                    "uploaded file exceeds the limit of {} bytes",
                    limit
                )));
            }
            buf.extend_from_slice(&chunk);
        }
        return Ok(buf);
    }

    Err(AppError::upload(format!(
        "missing '{}' field in upload",
        UPLOAD_FIELD
    )))
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index)).service(
        web::scope("/reports")
            .route("/sales", web::post().to(download_summary))
            .route("/sales/preview", web::post().to(preview_summary)),
    );
}
