use crate::{http::Error, schema::Post, types::id::PostId, App};

/// Reads a single post. Anyone may read any post.
#[derive(Debug)]
pub struct GetPost {
    pub id: PostId,
}

impl GetPost {
    #[tracing::instrument(skip(app), name = "services.posts.get")]
    pub async fn perform(self, app: &App) -> Result<Post, Error> {
        super::find_post(app, self.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::types;

    #[tokio::test]
    async fn should_return_not_found_for_unknown_post() {
        let app = test_utils::build_test_app();
        let error = GetPost { id: PostId::new(1) }
            .perform(&app)
            .await
            .unwrap_err();

        assert_eq!(error.as_type(), &types::Error::NotFound);
    }
}
