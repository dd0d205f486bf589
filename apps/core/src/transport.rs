use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::contract::{CoreRequest, CoreResponse, EntryDto, LaunchResponse, SearchResponse};
use crate::index::IndexService;
use crate::launcher;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    InvalidRequest,
    Launch,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: CoreResponse },
    Err { error: ErrorResponse },
}

pub fn handle_request(
    service: &IndexService,
    config: &Config,
    request: CoreRequest,
) -> TransportResponse {
    match request {
        CoreRequest::Search(request) => {
            let limit = request
                .limit
                .filter(|limit| *limit > 0)
                .unwrap_or(config.max_results)
                .min(config.max_results);

            let results: Vec<EntryDto> = service
                .search(&request.query, limit)
                .into_iter()
                .map(EntryDto::from)
                .collect();

            TransportResponse::Ok {
                response: CoreResponse::Search(SearchResponse { results }),
            }
        }
        CoreRequest::Launch(request) => {
            let path = request.path.trim();
            if path.is_empty() {
                return TransportResponse::Err {
                    error: ErrorResponse {
                        code: ErrorCode::InvalidRequest,
                        message: "launch path is required".to_string(),
                    },
                };
            }

            match launcher::launch_path(path) {
                Ok(()) => TransportResponse::Ok {
                    response: CoreResponse::Launch(LaunchResponse { launched: true }),
                },
                Err(error) => TransportResponse::Err {
                    error: ErrorResponse {
                        code: ErrorCode::Launch,
                        message: error.to_string(),
                    },
                },
            }
        }
    }
}

pub fn handle_json(service: &IndexService, config: &Config, payload: &str) -> String {
    let response = match serde_json::from_str::<CoreRequest>(payload) {
        Ok(request) => handle_request(service, config, request),
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
    };

    serde_json::to_string(&response).expect("transport response should serialize")
}
