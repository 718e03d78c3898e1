//! API Models
//!
//! Data structures matching backend responses, plus the normalization of the
//! legacy/new upload response shapes into one tagged outcome.

use serde::{Deserialize, Serialize};

pub use jubilee_core::{EventKind, MonthDay, RecurringEvent};

/// Fields accepted by `PUT /people/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonUpdate {
    pub name: String,
    pub event_type: EventKind,
    pub event_date: MonthDay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// One entry of the notification delivery log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageLog {
    pub id: u64,
    pub person_id: u64,
    pub message_content: String,
    pub sent_date: String,
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub person_name: Option<String>,
    #[serde(default)]
    pub person_phone: Option<String>,
}

/// Scheduler sub-status reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SchedulerStatus {
    pub is_running: bool,
    #[serde(default)]
    pub next_run_time: Option<String>,
    pub timezone: String,
    pub schedule_time: String,
    #[serde(default)]
    pub job_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub scheduler: Option<SchedulerStatus>,
    #[serde(default)]
    pub total_people: Option<u64>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Minimal profile persisted alongside the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Login/register payload exactly as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendLoginResponse {
    pub access_token: String,
    pub admin: BackendAdmin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendAdmin {
    pub username: String,
}

/// Session credentials normalized at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

impl From<BackendLoginResponse> for LoginOutcome {
    fn from(raw: BackendLoginResponse) -> Self {
        Self {
            token: raw.access_token,
            user: User {
                // The backend issues no user id; the admin account is 1.
                id: 1,
                username: raw.admin.username,
                email: None,
            },
        }
    }
}

/// `POST /upload-csv` response, with legacy and new-style fields coexisting.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub records_processed: Option<u32>,
    #[serde(default)]
    pub records_added: Option<u32>,
    #[serde(default)]
    pub records_updated: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Tagged form of the upload response; view code matches on this only.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// New-style async ingestion: file accepted, counts not yet known.
    Accepted {
        message: String,
        filename: Option<String>,
    },
    /// Legacy synchronous ingestion with record counts.
    Completed {
        processed: u32,
        added: u32,
        updated: u32,
    },
    Failed { error: String },
}

impl From<RawUploadResponse> for UploadOutcome {
    fn from(raw: RawUploadResponse) -> Self {
        if let Some(error) = raw.error {
            return UploadOutcome::Failed { error };
        }
        // Legacy responses carry counts regardless of any status field.
        if let Some(processed) = raw.records_processed {
            return UploadOutcome::Completed {
                processed,
                added: raw.records_added.unwrap_or(0),
                updated: raw.records_updated.unwrap_or(0),
            };
        }
        match raw.status.as_deref() {
            Some("processing") | Some("completed") | Some("success") => UploadOutcome::Accepted {
                message: raw
                    .message
                    .unwrap_or_else(|| "File uploaded successfully".to_string()),
                filename: raw.filename,
            },
            _ => UploadOutcome::Failed {
                error: raw.message.unwrap_or_else(|| "Upload failed".to_string()),
            },
        }
    }
}

/// `POST /api/anniversary-wish` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishRequest {
    pub name: String,
    pub relationship: String,
    pub anniversary_type: String,
    pub tone: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WishResponse {
    pub generated_wish: String,
    pub request_id: String,
    #[serde(default)]
    pub remaining_requests: Option<u32>,
    #[serde(default)]
    pub window_reset_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegenerateWishRequest {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_outcome_new_style_accepted() {
        let raw: RawUploadResponse = serde_json::from_str(
            r#"{"message": "Queued", "filename": "people.csv", "status": "processing"}"#,
        )
        .unwrap();
        assert_eq!(
            UploadOutcome::from(raw),
            UploadOutcome::Accepted {
                message: "Queued".to_string(),
                filename: Some("people.csv".to_string()),
            }
        );
    }

    #[test]
    fn test_upload_outcome_legacy_counts() {
        let raw: RawUploadResponse = serde_json::from_str(
            r#"{"success": true, "records_processed": 12, "records_added": 10, "records_updated": 2}"#,
        )
        .unwrap();
        assert_eq!(
            UploadOutcome::from(raw),
            UploadOutcome::Completed {
                processed: 12,
                added: 10,
                updated: 2,
            }
        );
    }

    #[test]
    fn test_upload_outcome_error_field_wins() {
        let raw: RawUploadResponse =
            serde_json::from_str(r#"{"status": "error", "error": "bad header row"}"#).unwrap();
        assert_eq!(
            UploadOutcome::from(raw),
            UploadOutcome::Failed {
                error: "bad header row".to_string(),
            }
        );
    }

    #[test]
    fn test_upload_outcome_unknown_status_fails() {
        let raw = RawUploadResponse::default();
        assert!(matches!(UploadOutcome::from(raw), UploadOutcome::Failed { .. }));
    }

    #[test]
    fn test_login_outcome_from_backend_shape() {
        let raw: BackendLoginResponse =
            serde_json::from_str(r#"{"access_token": "tok-1", "admin": {"username": "pat"}}"#)
                .unwrap();
        let outcome = LoginOutcome::from(raw);
        assert_eq!(outcome.token, "tok-1");
        assert_eq!(outcome.user.username, "pat");
        assert_eq!(outcome.user.id, 1);
    }

    #[test]
    fn test_person_update_skips_empty_optionals() {
        let update = PersonUpdate {
            name: "A".to_string(),
            event_type: EventKind::Birthday,
            event_date: "03-15".parse().unwrap(),
            year: None,
            spouse: None,
            phone_number: None,
        };
        let raw = serde_json::to_string(&update).unwrap();
        assert!(!raw.contains("year"));
        assert!(!raw.contains("spouse"));
        assert!(raw.contains(r#""event_date":"03-15""#));
    }
}
