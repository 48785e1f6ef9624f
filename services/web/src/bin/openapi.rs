//! services/web/src/bin/openapi.rs
//!
//! Writes the OpenAPI document for the Fitflix JSON endpoints (`/api/quote`
//! and `/health`) so it can be checked in or fed to client generators. The
//! page routes render HTML and are not part of the document.
//!
//! Usage: `openapi [OUTPUT]`, where `OUTPUT` defaults to `openapi.json`.

use utoipa::OpenApi;
use web_lib::web::rest::ApiDoc;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let api_doc = ApiDoc::openapi();
    std::fs::write(&output, api_doc.to_pretty_json()?)?;
    println!(
        "Wrote the Fitflix API document ({} paths) to {}",
        api_doc.paths.paths.len(),
        output
    );
    Ok(())
}
