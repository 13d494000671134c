//! The single application endpoint.
//!
//! `GET /` and `POST /` both land here. The action name comes from the query
//! string, else from the form body; every other field is read from the form
//! body with query values as a fallback.

use std::collections::HashMap;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};
use tracing::debug;

use super::session::SessionContext;
use super::views;
use crate::domain::{Action, AppResult, Controller, FormInput, Outcome};

/// Query or body parameter naming the action.
pub const ACTION_PARAM: &str = "action";

/// `Location` value for a redirect to `action`.
///
/// # Examples
/// ```
/// use dad_rental::domain::Action;
/// use dad_rental::inbound::http::dispatch::redirect_location;
///
/// assert_eq!(redirect_location(Action::WelcomeHome), ".?action=Welcome%20Home");
/// ```
#[must_use]
pub fn redirect_location(action: Action) -> String {
    format!(".?{ACTION_PARAM}={}", urlencoding::encode(action.as_str()))
}

fn resolve_action(query: &FormInput, body: &FormInput) -> Action {
    Action::parse(query.get(ACTION_PARAM).or_else(|| body.get(ACTION_PARAM)))
}

/// Dispatch one request through the controller.
pub async fn dispatch(
    controller: web::Data<Controller>,
    session: SessionContext,
    query: web::Query<HashMap<String, String>>,
    body: Option<web::Form<HashMap<String, String>>>,
) -> AppResult<HttpResponse> {
    let query = FormInput::new(query.into_inner());
    let mut form = body
        .map(|body| FormInput::new(body.into_inner()))
        .unwrap_or_default();
    let action = resolve_action(&query, &form);
    form.merge_missing(query);

    let loaded = session.load();
    let mut current = loaded.clone();
    let outcome = controller.invoke(action, &form, &mut current).await?;
    session.store(&loaded, &current)?;

    Ok(match outcome {
        Outcome::Redirect(target) => {
            debug!(from = %action, to = %target, "redirecting");
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, redirect_location(target)))
                .finish()
        }
        Outcome::Render(page) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .body(views::render(&page, &current).into_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[("action", "My Dads")], &[("action", "Login")], Action::MyDads)]
    #[case(&[], &[("action", "Login")], Action::Login)]
    #[case(&[], &[], Action::Home)]
    #[case(&[("action", "nonsense")], &[("action", "Login")], Action::Home)]
    fn query_action_wins_over_body(
        #[case] query: &[(&str, &str)],
        #[case] body: &[(&str, &str)],
        #[case] expected: Action,
    ) {
        let query = FormInput::from_iter(query.iter().copied());
        let body = FormInput::from_iter(body.iter().copied());
        assert_eq!(resolve_action(&query, &body), expected);
    }

    #[rstest]
    fn redirect_locations_are_encoded() {
        assert_eq!(redirect_location(Action::Unauthorized), ".?action=Unauthorized");
        assert_eq!(redirect_location(Action::LogoutHome), ".?action=Logout%20Home");
    }
}
