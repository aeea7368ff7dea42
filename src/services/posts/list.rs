use crate::{
    http::{Error, Identity},
    schema::Post,
    App,
};

/// Lists every post owned by the caller.
#[derive(Debug)]
pub struct ListPosts;

impl ListPosts {
    #[tracing::instrument(skip_all, fields(user.id = %identity.id), name = "services.posts.list")]
    pub async fn perform(self, app: &App, identity: &Identity) -> Result<Vec<Post>, Error> {
        Ok(app.db.posts_by_owner(identity.id).await?)
    }
}
