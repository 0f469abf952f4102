//! Hero card API routes

use axum::{extract::Query, Json};

use crate::application::dto::{
    ClickOriginDto, HeroFlipRequestDto, HeroTransformDto, HeroTransformQuery,
};
use crate::domain::services::{ClickOrigin, FlipCard};
use crate::domain::value_objects::{PointerPosition, Viewport};

impl From<ClickOriginDto> for ClickOrigin {
    fn from(origin: ClickOriginDto) -> Self {
        match origin {
            ClickOriginDto::Card => ClickOrigin::Card,
            ClickOriginDto::Control => ClickOrigin::NestedControl,
        }
    }
}

/// Card transform for one pointer sample
pub async fn get_transform(Query(query): Query<HeroTransformQuery>) -> Json<HeroTransformDto> {
    let card = FlipCard::flipped(query.flipped);
    let transform = card.transform(
        PointerPosition::new(query.x, query.y),
        Viewport::new(query.width, query.height),
    );
    Json(HeroTransformDto::new(card.is_flipped(), transform))
}

/// Apply a click to the card and return the resulting rest pose
pub async fn flip(Json(req): Json<HeroFlipRequestDto>) -> Json<HeroTransformDto> {
    let mut card = FlipCard::flipped(req.flipped);
    card.click(req.origin.into());
    let viewport = Viewport::unknown();
    Json(HeroTransformDto::new(
        card.is_flipped(),
        card.transform(viewport.center(), viewport),
    ))
}
