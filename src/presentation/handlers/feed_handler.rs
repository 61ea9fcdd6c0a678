use crate::{
    application::services::FeedService,
    presentation::dto::{
        content_dto::{FeedCardResponse, FeedRequest, FeedResponse},
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct FeedHandler {
    feed_service: Arc<FeedService>,
}

impl FeedHandler {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    pub async fn published(&self, request: FeedRequest) -> Result<FeedResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let items = self
            .feed_service
            .published(&request.region, &request.lang, request.query.as_deref())
            .await?;
        let items: Vec<FeedCardResponse> = items.into_iter().map(FeedCardResponse::from).collect();

        Ok(FeedResponse {
            region: request.region,
            lang: request.lang,
            total: items.len(),
            items,
        })
    }
}
