//! HTML rendering of domain pages.

use maud::{DOCTYPE, Markup, html};

use crate::domain::{
    Action, ClientSession, Dad, Error, ErrorCode, Field, HomeVariant, Page,
};

fn action_href(action: Action) -> String {
    format!(".?action={}", urlencoding::encode(action.as_str()))
}

/// Wrap `body` in the shared document and navigation.
fn layout(title: &str, session: &ClientSession, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Rent-a-Dad" }
            }
            body {
                header {
                    nav {
                        a href=(action_href(Action::Home)) { "Home" }
                        " "
                        a href=(action_href(Action::ShowDadSelection)) { "Dads" }
                        " "
                        @if session.is_valid_user() {
                            a href=(action_href(Action::MyDads)) { "My Dads" }
                            " "
                            a href=(action_href(Action::Logout)) { "Log out" }
                        } @else {
                            a href=(action_href(Action::ShowRegistration)) { "Register" }
                            " "
                            a href=(action_href(Action::ShowLogin)) { "Log in" }
                        }
                    }
                }
                main { (body) }
            }
        }
    }
}

fn label_for(field: &Field) -> String {
    let mut label = field.name().replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

fn field_input(field: &Field) -> Markup {
    html! {
        p {
            label for=(field.name()) { (label_for(field)) }
            br;
            input type=(field.kind().as_str()) id=(field.name()) name=(field.name()) value=(field.value());
            @if let Some(error) = field.error() {
                " "
                span class="error" { (error) }
            }
        }
    }
}

fn form(action: Action, fields: &[Field], hidden: &[(&str, String)], submit: &str) -> Markup {
    html! {
        form method="post" action="." {
            input type="hidden" name="action" value=(action.as_str());
            @for (name, value) in hidden {
                input type="hidden" name=(name) value=(value);
            }
            @for field in fields {
                (field_input(field))
            }
            button type="submit" { (submit) }
        }
    }
}

fn dad_card(dad: &Dad, with_rent_button: bool) -> Markup {
    html! {
        article class="dad" {
            img src=(dad.image_path) alt=(dad.full_name()) width="160";
            h2 { (dad.full_name()) }
            p { (dad.description) }
            p class="rate" { (dad.hourly_rate()) " per hour" }
            @if with_rent_button {
                (form(Action::RentThisDad, &[], &[("dad_id", dad.id.to_string())], "Rent this dad"))
            }
        }
    }
}

fn home(variant: HomeVariant, first_name: Option<&str>, notice: Option<&str>) -> Markup {
    let name = first_name.unwrap_or("friend");
    html! {
        @if let Some(notice) = notice {
            p class="notice" { (notice) }
        }
        h1 {
            @match variant {
                HomeVariant::Default => { "Welcome to Rent-a-Dad, " (name) "!" }
                HomeVariant::Returning => { "Welcome back, " (name) "!" }
                HomeVariant::Welcome => { "Thanks for joining, " (name) "!" }
                HomeVariant::Logout => { "You have logged out. See you soon!" }
            }
        }
        p {
            "Need someone to fix the sink, grill a steak or tell a terrible joke? "
            a href=(action_href(Action::ShowDadSelection)) { "Pick a dad." }
        }
    }
}

fn page_body(page: &Page) -> Markup {
    match page {
        Page::Home {
            variant,
            first_name,
            notice,
        } => home(*variant, first_name.as_deref(), notice.as_deref()),
        Page::Registration { fields } => html! {
            h1 { "Register" }
            (form(Action::Register, fields, &[], "Register"))
        },
        Page::Login {
            fields,
            login_error,
        } => html! {
            h1 { "Log in" }
            @if let Some(error) = login_error {
                p class="error" { (error) }
            }
            (form(Action::Login, fields, &[], "Log in"))
        },
        Page::DadSelection { dads } => html! {
            h1 { "Choose a dad" }
            @for dad in dads {
                (dad_card(dad, true))
            }
        },
        Page::Appointment { fields, dad } => html! {
            h1 { "Book " (dad.full_name()) }
            (dad_card(dad, false))
            (form(
                Action::SetAppointment,
                fields,
                &[("dad_id", dad.id.to_string())],
                "Set appointment",
            ))
        },
        Page::RentedDads { dads } => html! {
            h1 { "My dads" }
            @if dads.is_empty() {
                p { "You have not rented any dads yet." }
            }
            @for dad in dads {
                (dad_card(dad, false))
            }
        },
        Page::Unauthorized => html! {
            h1 { "Please log in" }
            p {
                "You need an account for that. "
                a href=(action_href(Action::ShowLogin)) { "Log in" }
                " or "
                a href=(action_href(Action::ShowRegistration)) { "register" }
                "."
            }
        },
        Page::AuthorizedError => html! {
            h1 { "Already signed in" }
            p {
                "You are already logged in. "
                a href=(action_href(Action::Logout)) { "Log out" }
                " first to use another account."
            }
        },
    }
}

/// Render `page` for a client in `session`.
#[must_use]
pub fn render(page: &Page, session: &ClientSession) -> Markup {
    layout(page.title(), session, page_body(page))
}

/// Render the error page for `error`.
///
/// Storage outages get the dedicated database page. Internal messages are
/// never shown.
#[must_use]
pub fn render_error(error: &Error) -> Markup {
    let session = ClientSession::default();
    let (title, message) = match error.code() {
        ErrorCode::ServiceUnavailable => (
            "Database error",
            "We could not reach the database. Please try again shortly.",
        ),
        ErrorCode::InternalError => ("Something went wrong", "Internal server error"),
        ErrorCode::NotFound => ("Not found", error.message()),
        ErrorCode::Unauthorized => ("Not signed in", error.message()),
        _ => ("Bad request", error.message()),
    };
    layout(
        title,
        &session,
        html! {
            h1 { (title) }
            p class="error" { (message) }
            @if let Some(trace_id) = error.trace_id() {
                p class="trace" { "Reference: " code { (trace_id) } }
            }
        },
    )
}
