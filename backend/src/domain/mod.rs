//! Domain primitives, ports and the action controller.
//!
//! Purpose: model the rental workflow without any HTTP or storage types.
//! Inbound adapters parse requests into an [`Action`], a [`FormInput`] and a
//! [`ClientSession`]; the [`Controller`] answers with an [`Outcome`].
//!
//! Public surface:
//! - Field, FieldKind, all_valid: form values and their validation errors.
//! - validator: rule set applied to fields.
//! - Action: closed set of dispatchable actions.
//! - ClientSession: explicit session context.
//! - Controller, ControllerPorts: dispatch over the ports in [`ports`].
//! - Page, Outcome, HomeVariant: what a handler produces.
//! - Error, ErrorCode: infrastructure and lookup failures.

pub mod action;
pub mod appointment;
pub mod client;
pub mod controller;
pub mod dad;
pub mod error;
pub mod field;
pub mod form;
pub mod page;
pub mod ports;
pub mod session;
pub mod trace_id;
pub mod validator;

pub use self::action::Action;
pub use self::appointment::{Appointment, parse_datetime_local};
pub use self::client::{ClientId, NewClient, PlainPassword};
pub use self::controller::{
    ACCOUNT_PROBLEM_MESSAGE, Controller, ControllerPorts, INVALID_DATETIME_MESSAGE,
    LOGIN_ERROR_MESSAGE,
};
pub use self::dad::{Dad, DadId, DadIdError};
pub use self::error::{Error, ErrorCode};
pub use self::field::{Field, FieldKind, all_valid};
pub use self::form::FormInput;
pub use self::page::{HomeVariant, Outcome, Page};
pub use self::session::ClientSession;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Result alias used across handlers.
pub type AppResult<T> = Result<T, Error>;
