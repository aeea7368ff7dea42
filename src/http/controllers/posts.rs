use actix_web::{
    web::{self, Json},
    HttpResponse,
};

use crate::{
    http::{util::parse_path_id, Error, Identity},
    services::posts::{CreatePost, DeletePost, GetPost, ListPosts, UpdatePost},
    types::form::posts::PostForm,
    App,
};

#[tracing::instrument(skip(app))]
pub async fn list(app: web::Data<App>, identity: Identity) -> Result<HttpResponse, Error> {
    let posts = ListPosts.perform(&app, &identity).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[tracing::instrument(skip(app))]
pub async fn get(app: web::Data<App>, path: web::Path<String>) -> Result<HttpResponse, Error> {
    let id = parse_path_id(&path)?;
    let post = GetPost { id }.perform(&app).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(app))]
pub async fn create(
    app: web::Data<App>,
    identity: Identity,
    form: Json<PostForm>,
) -> Result<HttpResponse, Error> {
    let post = CreatePost {
        form: form.into_inner(),
    }
    .perform(&app, &identity)
    .await?;

    Ok(HttpResponse::Created().json(post))
}

#[tracing::instrument(skip(app))]
pub async fn update(
    app: web::Data<App>,
    identity: Identity,
    path: web::Path<String>,
    form: Json<PostForm>,
) -> Result<HttpResponse, Error> {
    let id = parse_path_id(&path)?;
    let post = UpdatePost {
        id,
        form: form.into_inner(),
    }
    .perform(&app, &identity)
    .await?;

    Ok(HttpResponse::Ok().json(post))
}

#[tracing::instrument(skip(app))]
pub async fn delete(
    app: web::Data<App>,
    identity: Identity,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let id = parse_path_id(&path)?;
    DeletePost { id }.perform(&app, &identity).await?;
    Ok(HttpResponse::NoContent().finish())
}
