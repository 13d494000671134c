//! Session lifecycle: logout, tampered cookies and trace headers.

mod support;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use dad_rental::domain::TRACE_ID_HEADER;
use rstest::rstest;

use support::{
    CookieJar, SESSION_COOKIE, body_text, get_action, location, registration, rental_app,
    sample_store,
};

#[rstest]
#[actix_web::test]
async fn logout_ends_the_session() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;
    let mut jar = CookieJar::default();
    let response = test::call_service(&app, registration("bob").to_request()).await;
    jar.absorb(&response);
    assert!(jar.has_session());

    let response = test::call_service(&app, jar.attach(get_action("Logout")).to_request()).await;
    jar.absorb(&response);

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some(".?action=Logout%20Home"));
    assert!(!jar.has_session());

    let farewell =
        test::call_service(&app, jar.attach(get_action("Logout Home")).to_request()).await;
    assert!(body_text(farewell).await.contains("You have logged out."));

    let guarded = test::call_service(&app, jar.attach(get_action("My Dads")).to_request()).await;
    assert_eq!(location(&guarded).as_deref(), Some(".?action=Unauthorized"));
}

#[rstest]
#[actix_web::test]
async fn forged_cookie_is_treated_as_anonymous() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;

    let request = get_action("My Dads").cookie(Cookie::new(SESSION_COOKIE, "forged"));
    let response = test::call_service(&app, request.to_request()).await;

    assert_eq!(location(&response).as_deref(), Some(".?action=Unauthorized"));
}

#[rstest]
#[case("Home")]
#[case("Unauthorized")]
#[case("Authorized Error")]
#[case("no such action")]
#[actix_web::test]
async fn every_page_carries_a_trace_id(#[case] action: &str) {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;

    let response = test::call_service(&app, get_action(action).to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}

#[rstest]
#[actix_web::test]
async fn anonymous_home_greets_a_friend() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;

    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    let body = body_text(response).await;
    assert!(body.contains("Welcome to Rent-a-Dad, friend!"));
    assert!(body.contains("Register"));
}
