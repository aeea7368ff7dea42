use crate::{
    http::{Error, Identity},
    schema::Post,
    types::{self, id::PostId},
    App,
};

mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::CreatePost;
pub use delete::DeletePost;
pub use get::GetPost;
pub use list::ListPosts;
pub use update::UpdatePost;

#[derive(Debug, thiserror::Error)]
#[error("Unknown post")]
struct UnknownPost;

#[derive(Debug, thiserror::Error)]
#[error("Post is owned by another user")]
struct NotPostOwner;

pub(crate) async fn find_post(app: &App, id: PostId) -> Result<Post, Error> {
    app.db
        .find_post(id)
        .await?
        .ok_or_else(|| Error::from_context(types::Error::NotFound, UnknownPost))
}

/// A post has to exist before its ownership is checked, so a missing
/// post always results in `NotFound` even for non-owners.
pub(crate) async fn find_owned_post(
    app: &App,
    identity: &Identity,
    id: PostId,
) -> Result<Post, Error> {
    let post = find_post(app, id).await?;
    if post.user_id != identity.id {
        return Err(Error::from_context(types::Error::Forbidden, NotPostOwner));
    }
    Ok(post)
}
