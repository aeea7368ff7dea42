use actix_web::{
    http::{header, Method, StatusCode},
    test::{self, TestRequest},
    web,
};
use assert_json_diff::assert_json_include;
use serde_json::{json, Value};

use crate::test_utils;

macro_rules! init_app {
    () => {
        test::init_service(
            actix_web::App::new()
                .app_data(web::Data::new(test_utils::build_test_app()))
                .configure(super::configure),
        )
        .await
    };
}

macro_rules! call {
    ($service:expr, $req:expr) => {{
        let res = test::call_service(&$service, $req.to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice::<Value>(&body).unwrap()
        };
        (status, body)
    }};
}

macro_rules! sign_in {
    ($service:expr, $username:expr, $password:expr) => {{
        let credentials = json!({ "username": $username, "password": $password });
        let (status, _) = call!(
            $service,
            TestRequest::post()
                .uri("/api/auth/signup")
                .set_json(&credentials)
        );
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call!(
            $service,
            TestRequest::post()
                .uri("/api/auth/signin")
                .set_json(&credentials)
        );
        assert_eq!(status, StatusCode::OK);
        format!("Bearer {}", body["token"].as_str().unwrap())
    }};
}

#[actix_web::test]
async fn full_post_lifecycle() {
    let service = init_app!();
    let token = sign_in!(service, "alice", "pw1");

    let (status, created) = call!(
        service,
        TestRequest::post()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "title": "Hi", "content": "World" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_json_include!(
        actual: &created,
        expected: json!({ "title": "Hi", "content": "World", "user_id": 1 })
    );
    let id = created["id"].as_u64().unwrap();
    assert!(id > 0);
    assert!(!created["timestamp"].as_str().unwrap().is_empty());

    let (status, posts) = call!(
        service,
        TestRequest::get()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts, json!([created.clone()]));

    let (status, updated) = call!(
        service,
        TestRequest::put()
            .uri(&format!("/api/post/{id}"))
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "title": "Hi2", "content": "World" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Hi2");
    assert_eq!(updated["timestamp"], created["timestamp"]);

    let (status, body) = call!(
        service,
        TestRequest::delete()
            .uri(&format!("/api/post/{id}"))
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = call!(
        service,
        TestRequest::get().uri(&format!("/api/post/{id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_json_include!(actual: body, expected: json!({ "code": 13 }));
}

#[actix_web::test]
async fn get_post_is_public() {
    let service = init_app!();
    let token = sign_in!(service, "alice", "pw1");

    let (_, created) = call!(
        service,
        TestRequest::post()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "title": "Hi", "content": "World" }))
    );

    let (status, body) = call!(
        service,
        TestRequest::get().uri(&format!("/api/post/{}", created["id"]))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[actix_web::test]
async fn protected_routes_require_token() {
    let service = init_app!();

    let requests = [
        TestRequest::get().uri("/api/post"),
        TestRequest::post()
            .uri("/api/post")
            .set_json(json!({ "title": "Hi", "content": "World" })),
        TestRequest::put()
            .uri("/api/post/1")
            .set_json(json!({ "title": "Hi", "content": "World" })),
        TestRequest::delete().uri("/api/post/1"),
        TestRequest::get()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token")),
    ];

    for req in requests {
        let (status, body) = call!(service, req);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_json_include!(actual: body, expected: json!({ "code": 11 }));
    }
}

#[actix_web::test]
async fn other_users_cannot_modify_posts() {
    let service = init_app!();
    let alice = sign_in!(service, "alice", "pw1");
    let bob = sign_in!(service, "bob", "pw2");

    let (_, created) = call!(
        service,
        TestRequest::post()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, alice.as_str()))
            .set_json(json!({ "title": "Hi", "content": "World" }))
    );
    let uri = format!("/api/post/{}", created["id"]);

    let (status, _) = call!(
        service,
        TestRequest::put()
            .uri(&uri)
            .insert_header((header::AUTHORIZATION, bob.as_str()))
            .set_json(json!({ "title": "Mine", "content": "now" }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call!(
        service,
        TestRequest::delete()
            .uri(&uri)
            .insert_header((header::AUTHORIZATION, bob.as_str()))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, posts) = call!(
        service,
        TestRequest::get()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, bob.as_str()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(posts, json!([]));

    let (_, body) = call!(service, TestRequest::get().uri(&uri));
    assert_eq!(body, created);
}

#[actix_web::test]
async fn invalid_bodies_and_ids() {
    let service = init_app!();
    let token = sign_in!(service, "alice", "pw1");

    let (status, body) = call!(
        service,
        TestRequest::post()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .set_json(json!({ "title": "Hi" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_include!(
        actual: body,
        expected: json!({
            "code": 10,
            "data": { "content": { "_errors": ["Content is required"] } },
        })
    );

    let (status, _) = call!(
        service,
        TestRequest::post()
            .uri("/api/post")
            .insert_header((header::AUTHORIZATION, token.as_str()))
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for id in ["0", "abc", "-1"] {
        let (status, _) = call!(
            service,
            TestRequest::get().uri(&format!("/api/post/{id}"))
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = call!(
        service,
        TestRequest::delete()
            .uri("/api/post/77")
            .insert_header((header::AUTHORIZATION, token.as_str()))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn account_errors() {
    let service = init_app!();
    sign_in!(service, "alice", "pw1");

    let (status, body) = call!(
        service,
        TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "username": "alice", "password": "again" }))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_json_include!(actual: body, expected: json!({ "code": 21 }));

    let (status, _) = call!(
        service,
        TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({ "username": "", "password": "" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call!(
        service,
        TestRequest::post()
            .uri("/api/auth/signin")
            .set_json(json!({ "username": "alice", "password": "nope" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_json_include!(actual: body, expected: json!({ "code": 20 }));
}

#[actix_web::test]
async fn browser_clients_pass_cors_checks() {
    let app = test_utils::build_test_app();
    let service = test::init_service(
        actix_web::App::new()
            .wrap(crate::http::cors(&app.config.cors))
            .app_data(web::Data::new(app))
            .configure(super::configure),
    )
    .await;

    let origin = "http://localhost:3000";
    let preflight = TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/post")
        .insert_header((header::ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization, content-type"))
        .to_request();

    let res = test::call_service(&service, preflight).await;
    assert!(res.status().is_success());
    assert_eq!(
        res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        origin
    );

    let get = TestRequest::get()
        .uri("/api/post/1")
        .insert_header((header::ORIGIN, origin))
        .to_request();

    let res = test::call_service(&service, get).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        origin
    );

    let foreign = TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/post")
        .insert_header((header::ORIGIN, "http://evil.example.com"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();

    let res = test::call_service(&service, foreign).await;
    assert!(res
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
