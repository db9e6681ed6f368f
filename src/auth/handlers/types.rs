/**
 * Request/Response Types for Credential Endpoints
 *
 * Fields default to empty strings on deserialization so a missing field
 * flows into validation (and gets its "is required" message) instead of
 * bouncing off the JSON extractor.
 */

use serde::{Deserialize, Serialize};

/// Signup request body
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful signup/login response
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
