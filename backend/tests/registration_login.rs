//! Registration and login through the real HTTP stack.

mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use dad_rental::domain::LOGIN_ERROR_MESSAGE;
use dad_rental::domain::validator::USERNAME_TAKEN_MESSAGE;
use rstest::rstest;

use support::{
    CookieJar, GOOD_PASSWORD, body_text, get_action, location, post_action, registration,
    rental_app, sample_store,
};

#[rstest]
#[actix_web::test]
async fn registering_signs_the_client_in() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;
    let mut jar = CookieJar::default();

    let response = test::call_service(&app, jar.attach(registration("bob")).to_request()).await;
    jar.absorb(&response);

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some(".?action=Welcome%20Home"));
    assert!(jar.has_session());

    let welcome =
        test::call_service(&app, jar.attach(get_action("Welcome Home")).to_request()).await;
    let body = body_text(welcome).await;
    assert!(body.contains("Thanks for joining, Bob!"));
    assert!(body.contains("Log out"));
}

#[rstest]
#[actix_web::test]
async fn short_password_redisplays_the_form() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;

    let request = post_action(
        "Register",
        &[
            ("username", "bob"),
            ("password", "abc"),
            ("confirm_password", "abc"),
            ("first_name", "Bob"),
            ("last_name", "Smith"),
            ("email", "bob@example.com"),
        ],
    );
    let response = test::call_service(&app, request.to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(location(&response).is_none());
    let body = body_text(response).await;
    assert!(body.contains("Must be between 8 and 20 characters."));
    assert!(!body.contains("Must contain a number."));
    assert!(body.contains("value=\"bob\""));
    assert!(!body.contains("value=\"abc\""));
}

#[rstest]
#[actix_web::test]
async fn taken_username_is_reported() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;

    let first = test::call_service(&app, registration("bob").to_request()).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = test::call_service(&app, registration("bob").to_request()).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert!(body_text(second).await.contains(USERNAME_TAKEN_MESSAGE));
}

#[rstest]
#[actix_web::test]
async fn padded_username_is_stored_trimmed() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;
    let longest = "a".repeat(25);

    let request = registration(&format!("  {longest}  "));
    let padded = test::call_service(&app, request.to_request()).await;
    assert_eq!(location(&padded).as_deref(), Some(".?action=Welcome%20Home"));

    let twin = test::call_service(&app, registration(&longest).to_request()).await;
    assert_eq!(twin.status(), StatusCode::OK);
    assert!(body_text(twin).await.contains(USERNAME_TAKEN_MESSAGE));

    let mut jar = CookieJar::default();
    let request = post_action(
        "Login",
        &[("username", longest.as_str()), ("password", GOOD_PASSWORD)],
    );
    let response = test::call_service(&app, jar.attach(request).to_request()).await;
    jar.absorb(&response);
    assert_eq!(location(&response).as_deref(), Some(".?action=Returning%20Home"));
    assert!(jar.has_session());
}

#[rstest]
#[case("bob", "Wrong123!")]
#[case("alice", GOOD_PASSWORD)]
#[case("", "")]
#[actix_web::test]
async fn unrecognised_credentials_show_login_error(
    #[case] username: &str,
    #[case] password: &str,
) {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;
    test::call_service(&app, registration("bob").to_request()).await;

    let mut jar = CookieJar::default();
    let request = post_action("Login", &[("username", username), ("password", password)]);
    let response = test::call_service(&app, request.to_request()).await;
    jar.absorb(&response);

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!jar.has_session());
    let body = body_text(response).await;
    assert!(body.contains(LOGIN_ERROR_MESSAGE));
    assert!(!body.contains("Wrong123!"));
}

#[rstest]
#[actix_web::test]
async fn login_then_returning_home() {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;
    test::call_service(&app, registration("bob").to_request()).await;

    let mut jar = CookieJar::default();
    let request = post_action("Login", &[("username", "bob"), ("password", GOOD_PASSWORD)]);
    let response = test::call_service(&app, jar.attach(request).to_request()).await;
    jar.absorb(&response);

    assert_eq!(location(&response).as_deref(), Some(".?action=Returning%20Home"));

    let home =
        test::call_service(&app, jar.attach(get_action("Returning Home")).to_request()).await;
    assert!(body_text(home).await.contains("Welcome back, Bob!"));
}

#[rstest]
#[case("Show Registration")]
#[case("Show Login")]
#[case("Login")]
#[case("Register")]
#[actix_web::test]
async fn signed_in_clients_cannot_reach_guest_pages(#[case] action: &str) {
    let store = sample_store();
    let app = test::init_service(rental_app(&store)).await;
    let mut jar = CookieJar::default();
    let response = test::call_service(&app, registration("bob").to_request()).await;
    jar.absorb(&response);

    let response = test::call_service(&app, jar.attach(get_action(action)).to_request()).await;

    assert_eq!(location(&response).as_deref(), Some(".?action=Authorized%20Error"));
}
