use validator::Validate;

use crate::{
    http::{Error, Identity},
    schema::{InsertPost, Post},
    types::form::posts::PostForm,
    App,
};

/// Publishes a new post owned by the caller.
#[derive(Debug)]
pub struct CreatePost {
    pub form: PostForm,
}

impl CreatePost {
    #[tracing::instrument(skip_all, fields(user.id = %identity.id), name = "services.posts.create")]
    pub async fn perform(self, app: &App, identity: &Identity) -> Result<Post, Error> {
        self.form.validate()?;

        let post = app
            .db
            .insert_post(InsertPost {
                title: &self.form.title,
                content: &self.form.content,
                user_id: identity.id,
            })
            .await?;

        tracing::debug!(post.id = %post.id, "created post");
        Ok(post)
    }
}
