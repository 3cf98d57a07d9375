use crate::core::{self, build_pools, diagnose_pair, is_eligible_pair, pair_score};
use crate::models::{
    Competitor, DiagnosePairRequest, DiagnosePairResponse, ErrorResponse, HealthResponse,
    ProposeMatchesRequest, ProposeMatchesResponse, ValidateJudgeRequest, ValidateJudgeResponse,
};
use crate::services::{CacheKey, CacheManager, PostgresClient, StoreError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub min_panel_size: u32,
}

/// Configure all pairing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/propose", web::post().to(propose_matches))
        .route("/judges/validate", web::post().to(validate_judge))
        .route("/debug/pair", web::post().to(debug_pair));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Propose matches endpoint
///
/// POST /api/v1/matches/propose
///
/// Request body:
/// ```json
/// {
///   "eventId": "string",
///   "allowOngoingMatches": false,
///   "includeTitleMatches": false,
///   "useGlobalPool": false,
///   "matchType": "sparring",
///   "isPromotionMatch": false
/// }
/// ```
async fn propose_matches(
    state: web::Data<AppState>,
    req: web::Json<ProposeMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for propose_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let event_id = &req.event_id;

    tracing::info!(
        "Proposing matches for event {} (global_pool: {}, allow_ongoing: {}, title: {})",
        event_id,
        req.use_global_pool,
        req.allow_ongoing_matches,
        req.include_title_matches
    );

    // Roster snapshots move slowly and are cached; the match history is
    // always read fresh so a bout finished a second ago is respected.
    let roster = match load_roster(&state, event_id, req.use_global_pool).await {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to load roster for {}: {}", event_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load competitor roster".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let history = match state.store.list_event_matches(event_id).await {
        Ok(history) => history,
        Err(e) => {
            tracing::error!("Failed to load match history for {}: {}", event_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load match history".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let pools = build_pools(
        roster,
        &history,
        req.allow_ongoing_matches,
        req.include_title_matches,
    );

    let result = core::propose_matches(&pools, &req.match_type, req.is_promotion_match);

    tracing::info!(
        "Event {}: {} proposals from {} regular / {} title candidates",
        event_id,
        result.proposals.len(),
        result.regular_pool_size,
        result.title_pool_size
    );

    HttpResponse::Ok().json(ProposeMatchesResponse {
        proposals: result.proposals,
        regular_pool_size: result.regular_pool_size,
        title_pool_size: result.title_pool_size,
        pairs_considered: result.pairs_considered,
    })
}

async fn load_roster(
    state: &AppState,
    event_id: &str,
    use_global_pool: bool,
) -> Result<Vec<Competitor>, StoreError> {
    let cache_key = if use_global_pool {
        CacheKey::members()
    } else {
        CacheKey::roster(event_id)
    };

    if let Ok(cached) = state.cache.get::<Vec<Competitor>>(&cache_key).await {
        return Ok(cached);
    }

    let roster = if use_global_pool {
        state.store.list_active_members().await?
    } else {
        state.store.list_registered_competitors(event_id).await?
    };

    if let Err(e) = state.cache.set(&cache_key, &roster).await {
        tracing::warn!("Failed to cache roster {}: {}", cache_key, e);
    }

    Ok(roster)
}

/// Judge validation endpoint
///
/// POST /api/v1/judges/validate
///
/// Returns whether the judge can be assigned to the event without a
/// conflict of interest. Panel size is advisory; the caller enforces it
/// once it has collected enough valid judges.
async fn validate_judge(
    state: web::Data<AppState>,
    req: web::Json<ValidateJudgeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for validate_judge request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let judge = match load_judge(&state, &req.judge_id).await {
        Ok(judge) => judge,
        Err(StoreError::NotFound(what)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Judge not found".to_string(),
                message: what,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to resolve judge {}: {}", req.judge_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to resolve judge".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let assignable = match &judge.competitor_id {
        // A judge that was never a competitor cannot conflict.
        None => true,
        Some(competitor_id) => {
            match state
                .store
                .judge_participation(competitor_id, &req.event_id)
                .await
            {
                Ok(participation) => core::is_assignable(Some(&participation)),
                Err(e) => {
                    tracing::error!(
                        "Failed to check participation of judge {} in {}: {}",
                        req.judge_id,
                        req.event_id,
                        e
                    );
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Failed to check judge participation".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            }
        }
    };

    tracing::info!(
        "Judge {} for event {}: assignable = {}",
        req.judge_id,
        req.event_id,
        assignable
    );

    HttpResponse::Ok().json(ValidateJudgeResponse {
        assignable,
        min_panel_size: state.min_panel_size,
    })
}

async fn load_judge(
    state: &AppState,
    judge_id: &str,
) -> Result<crate::models::JudgeProfile, StoreError> {
    let cache_key = CacheKey::judge(judge_id);

    if let Ok(cached) = state.cache.get(&cache_key).await {
        return Ok(cached);
    }

    let judge = state.store.resolve_judge(judge_id).await?;

    if let Err(e) = state.cache.set(&cache_key, &judge).await {
        tracing::warn!("Failed to cache judge {}: {}", judge_id, e);
    }

    Ok(judge)
}

/// Pair diagnostics endpoint used by admin tooling to explain why two
/// members were (not) paired. Note the diagnostics' age verdict is
/// stricter than the production check when exactly one age is missing.
async fn debug_pair(req: web::Json<DiagnosePairRequest>) -> impl Responder {
    let DiagnosePairRequest {
        competitor_a,
        competitor_b,
    } = req.into_inner();

    let diagnostics = diagnose_pair(&competitor_a, &competitor_b);
    let eligible = is_eligible_pair(&competitor_a, &competitor_b);
    let score = eligible.then(|| pair_score(&competitor_a, &competitor_b));

    HttpResponse::Ok().json(DiagnosePairResponse {
        diagnostics,
        eligible,
        score,
    })
}
