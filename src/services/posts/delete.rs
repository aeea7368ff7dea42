use crate::{
    http::{Error, Identity},
    types::{self, id::PostId},
    App,
};

/// Deletes a post owned by the caller.
#[derive(Debug)]
pub struct DeletePost {
    pub id: PostId,
}

impl DeletePost {
    #[tracing::instrument(
        skip_all,
        fields(post.id = %self.id, user.id = %identity.id),
        name = "services.posts.delete",
    )]
    pub async fn perform(self, app: &App, identity: &Identity) -> Result<(), Error> {
        let post = super::find_owned_post(app, identity, self.id).await?;
        if app.db.delete_post(post.id).await? {
            Ok(())
        } else {
            Err(Error::new(types::Error::NotFound))
        }
    }
}
