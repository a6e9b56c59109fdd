use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::config::{self, ApiConfig};
use crate::debug_log;
use crate::errors::ApiError;
use crate::models::{
    AtsScoreOut, AtsScoreRequest, Credentials, EnhanceOut, EnhanceRequest, ExportFormat, ExportOut,
    ExportRequest, SignupOut, TokenOut, UploadOut,
};

// REST client for the resume service.  No request carries the stored
// credential token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Client using the effective runtime configuration.
    pub fn from_current_config() -> Self {
        Self::new(config::current())
    }

    // -------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------

    /// Exchange credentials for an access token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let out: TokenOut = self.post_json("/login", credentials).await?;
        token_from(out)
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let out: SignupOut = self.post_json("/signup", credentials).await?;
        check_signup(out)
    }

    // -------------------------------------------------------------------
    // Resume workflow
    // -------------------------------------------------------------------

    /// Upload a PDF/DOCX as multipart field `file`.
    pub async fn upload_resume(&self, file: &web_sys::File) -> Result<UploadOut, ApiError> {
        let form = FormData::new()?;
        form.append_with_blob_and_filename("file", file, &file.name())?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        // No Content-Type: the browser adds the multipart boundary itself.
        opts.set_body(form.as_ref());

        let request = Request::new_with_str_and_init(&self.config.url("/upload"), &opts)?;
        let text = Self::send(request).await?;
        decode(&text)
    }

    pub async fn ats_score(&self, resume_text: &str) -> Result<AtsScoreOut, ApiError> {
        self.post_json("/ats-score", &AtsScoreRequest::new(resume_text)).await
    }

    pub async fn enhance(&self, resume_text: &str) -> Result<EnhanceOut, ApiError> {
        self.post_json("/ai-enhance", &EnhanceRequest::new(resume_text)).await
    }

    /// Ask the service to render the text; the file stays server-side.
    pub async fn export(&self, format: ExportFormat, resume_text: &str) -> Result<ExportOut, ApiError> {
        let body = ExportRequest { resume_text: resume_text.to_string() };
        self.post_json(format.endpoint(), &body).await
    }

    // -------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_string(body)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&payload));

        let headers = Headers::new()?;
        headers.append("Content-Type", "application/json")?;
        opts.set_headers(&headers);

        let url = self.config.url(path);
        debug_log!("POST {}", url);
        let request = Request::new_with_str_and_init(&url, &opts)?;
        let text = Self::send(request).await?;
        decode(&text)
    }

    // Issue the request and return the body of a 2xx response as text.
    async fn send(request: Request) -> Result<String, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no global window exists".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status(), status_text: resp.status_text() });
        }

        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// The login endpoint signals bad credentials in a 200 body.
fn token_from(out: TokenOut) -> Result<String, ApiError> {
    match out.access_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::Rejected(out.error.unwrap_or_else(|| "no access token in response".into()))),
    }
}

fn check_signup(out: SignupOut) -> Result<(), ApiError> {
    match out.error {
        Some(error) => Err(ApiError::Rejected(error)),
        None => {
            if let Some(message) = out.message {
                debug_log!("Signup: {}", message);
            }
            Ok(())
        }
    }
}
