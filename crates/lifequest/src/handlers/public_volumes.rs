//! Unauthenticated access to published volumes.

use axum::extract::{Path, State};
use chrono::Utc;
use rand::seq::IndexedRandom;
use serde::Serialize;

use lifequest_core::volume::{CatalogueEntry, RateVolumeRequest, Volume};

use super::{ApiJson, ApiResponse, AppError};
use crate::state::AppState;

async fn find_published(state: &AppState, volume_number: u32) -> Result<Volume, AppError> {
    state
        .volumes
        .get_volume_by_number(volume_number)
        .await?
        .filter(Volume::is_published)
        .ok_or_else(|| AppError::not_found(format!("Volume {volume_number} not found")))
}

/// Number and title of every published volume (GET /api/public/volumes/catalogue).
pub async fn catalogue(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<CatalogueEntry>>, AppError> {
    let mut volumes = state.volumes.list_published_volumes().await?;
    volumes.sort_by_key(|v| v.volume_number);
    Ok(ApiResponse::list(
        volumes.iter().map(Volume::catalogue_entry).collect(),
    ))
}

/// A uniformly random published volume (GET /api/public/volumes/random).
pub async fn random(State(state): State<AppState>) -> Result<ApiResponse<Volume>, AppError> {
    let volumes = state.volumes.list_published_volumes().await?;
    let volume = volumes
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| AppError::not_found("No volumes found"))?;
    Ok(ApiResponse::ok(volume))
}

/// A published volume by number (GET /api/public/volumes/id/{number}).
pub async fn get_by_number(
    State(state): State<AppState>,
    Path(volume_number): Path<u32>,
) -> Result<ApiResponse<Volume>, AppError> {
    Ok(ApiResponse::ok(find_published(&state, volume_number).await?))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub volume_number: u32,
    pub average_rating: f64,
    pub rating_count: u64,
}

/// Rate a published volume 1..=5 (POST /api/public/volumes/id/{number}/rate).
pub async fn rate(
    State(state): State<AppState>,
    Path(volume_number): Path<u32>,
    ApiJson(req): ApiJson<RateVolumeRequest>,
) -> Result<ApiResponse<RatingSummary>, AppError> {
    let mut volume = find_published(&state, volume_number).await?;
    volume.rate(req.value, Utc::now())?;
    state.volumes.update_volume(&volume).await?;

    tracing::info!(volume_number, value = req.value, "Rated volume");

    Ok(ApiResponse::ok(RatingSummary {
        volume_number,
        average_rating: volume.average_rating,
        rating_count: volume.rating_count,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSummary {
    pub volume_number: u32,
    pub favorite_count: u64,
}

/// Favorite a published volume (POST /api/public/volumes/id/{number}/favorite).
pub async fn favorite(
    State(state): State<AppState>,
    Path(volume_number): Path<u32>,
) -> Result<ApiResponse<FavoriteSummary>, AppError> {
    let mut volume = find_published(&state, volume_number).await?;
    volume.favorite(Utc::now());
    state.volumes.update_volume(&volume).await?;

    tracing::info!(volume_number, favorites = volume.favorite_count, "Favorited volume");

    Ok(ApiResponse::ok(FavoriteSummary {
        volume_number,
        favorite_count: volume.favorite_count,
    }))
}
