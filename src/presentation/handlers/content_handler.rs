use crate::{
    application::services::FeedService,
    domain::value_objects::ContentId,
    presentation::dto::{
        content_dto::{ContentDetailResponse, ViewContentRequest},
        Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct ContentHandler {
    feed_service: Arc<FeedService>,
}

impl ContentHandler {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    pub async fn view(
        &self,
        request: ViewContentRequest,
    ) -> Result<ContentDetailResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;
        let id = request
            .id
            .parse::<ContentId>()
            .map_err(AppError::InvalidInput)?;

        let view = self.feed_service.view(id, &request.lang).await?;
        Ok(ContentDetailResponse::from(view))
    }
}
