use actix_web::{
    web::{self, Json},
    HttpResponse,
};

use crate::{
    http::Error,
    services::users::{SignIn, SignUp},
    types::form::users::{signin, signup},
    App,
};

#[tracing::instrument(skip_all)]
pub async fn signup(
    app: web::Data<App>,
    form: Json<signup::Request>,
) -> Result<HttpResponse, Error> {
    let user = SignUp {
        form: form.into_inner(),
    }
    .perform(&app)
    .await?;

    Ok(HttpResponse::Created().json(signup::Response {
        id: user.id,
        username: user.username,
    }))
}

#[tracing::instrument(skip_all)]
pub async fn signin(
    app: web::Data<App>,
    form: Json<signin::Request>,
) -> Result<HttpResponse, Error> {
    let response = SignIn {
        form: form.into_inner(),
    }
    .perform(&app)
    .await?;

    Ok(HttpResponse::Ok().json(signin::Response {
        id: response.user.id,
        username: response.user.username,
        token: response.token.into(),
    }))
}
