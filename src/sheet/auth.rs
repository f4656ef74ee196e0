// src/sheet/auth.rs
//! Google service-account auth: sign a JWT with the account's RSA key and
//! trade it for a bearer token.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use openssl::hash::MessageDigest;
use openssl::pkey::PKey;
use openssl::sign::Signer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::consts::{SHEETS_SCOPE, TOKEN_LIFETIME_SECS, TOKEN_REFRESH_MARGIN_SECS};
use crate::error::{Error, Result};

const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// The fields we need from a downloaded service-account key file.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    s!(DEFAULT_TOKEN_URI)
}

impl ServiceAccountKey {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Auth(format!("cannot read credentials {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// `header.claims.signature`, RS256, base64url without padding.
pub fn signed_assertion(key: &ServiceAccountKey, scope: &str, issued_at: u64) -> Result<String> {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let claims = Claims {
        iss: &key.client_email,
        scope,
        aud: &key.token_uri,
        iat: issued_at,
        exp: issued_at + TOKEN_LIFETIME_SECS,
    };
    let claims = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
    let signing_input = join!(&header, ".", &claims);

    let pkey = PKey::private_key_from_pem(key.private_key.as_bytes())?;
    let mut signer = Signer::new(MessageDigest::sha256(), &pkey)?;
    signer.update(signing_input.as_bytes())?;
    let sig = URL_SAFE_NO_PAD.encode(signer.sign_to_vec()?);

    Ok(join!(&signing_input, ".", &sig))
}

/// Caches the bearer token until shortly before it expires.
pub struct ServiceAccount {
    key: ServiceAccountKey,
    http: reqwest::Client,
    cached: Option<(String, Instant)>,
}

impl ServiceAccount {
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> Self {
        Self { key, http, cached: None }
    }

    pub async fn token(&mut self) -> Result<String> {
        if let Some((tok, until)) = &self.cached {
            if Instant::now() < *until {
                return Ok(tok.clone());
            }
        }

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| Error::Auth(e.to_string()))?
            .as_secs();
        let assertion = signed_assertion(&self.key, SHEETS_SCOPE, now)?;

        debug!("requesting access token for {}", self.key.client_email);
        let resp = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Auth(format!("token endpoint returned {status}: {body}")));
        }
        let body: TokenResponse = resp.json().await?;

        let lifetime = body
            .expires_in
            .unwrap_or(TOKEN_LIFETIME_SECS)
            .saturating_sub(TOKEN_REFRESH_MARGIN_SECS);
        let until = Instant::now() + Duration::from_secs(lifetime);
        self.cached = Some((body.access_token.clone(), until));
        Ok(body.access_token)
    }
}
