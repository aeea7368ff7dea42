use validator::Validate;

use crate::{
    http::{Error, Identity},
    schema::Post,
    types::{self, form::posts::PostForm, id::PostId},
    App,
};

/// Replaces the title and content of a post owned by the caller.
/// Its timestamp and owner never change.
#[derive(Debug)]
pub struct UpdatePost {
    pub id: PostId,
    pub form: PostForm,
}

impl UpdatePost {
    #[tracing::instrument(
        skip_all,
        fields(post.id = %self.id, user.id = %identity.id),
        name = "services.posts.update",
    )]
    pub async fn perform(self, app: &App, identity: &Identity) -> Result<Post, Error> {
        self.form.validate()?;

        let post = super::find_owned_post(app, identity, self.id).await?;
        let updated = app
            .db
            .update_post(post.id, &self.form.title, &self.form.content)
            .await?;

        // Deleted after it was found.
        updated.ok_or_else(|| Error::new(types::Error::NotFound))
    }
}
