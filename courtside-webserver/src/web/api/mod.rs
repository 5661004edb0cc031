use std::{fmt::Display, result};

use courtside_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, catch, catchers, delete, get,
    http::Status,
    post, put,
    response::{self, status::Created, Responder},
    routes, Catcher, Request, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::{jwt, sqlite, Cfg},
};
use courtside_application::prelude as flows;
use courtside_core::{entities::*, usecases};

mod admin;
mod bookings;
mod dashboards;
mod error;
mod reviews;
mod users;
mod venues;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::post_user,
        users::post_verify_email,
        users::post_verification_code,
        users::get_current_user,
        // ---   venues   --- //
        venues::get_venues,
        venues::get_my_venues,
        venues::get_venue,
        venues::post_venue,
        venues::put_venue,
        venues::delete_venue,
        venues::get_booked_slots,
        venues::get_venue_bookings,
        venues::get_venue_reviews,
        venues::post_venue_review,
        // ---   bookings   --- //
        bookings::post_booking,
        bookings::get_bookings,
        bookings::post_confirm_booking,
        bookings::delete_booking,
        // ---   reviews   --- //
        reviews::put_review,
        reviews::delete_review,
        // ---   admin   --- //
        admin::get_venues_by_status,
        admin::post_approve_venue,
        admin::post_reject_venue,
        admin::post_resolve_update,
        admin::post_resolve_deletion,
        admin::post_ban_user,
        admin::post_unban_user,
        // ---   dashboards   --- //
        dashboards::get_admin_dashboard,
        dashboards::get_owner_dashboard,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

// Failing request guards and unknown routes
#[catch(default)]
fn default_catcher(status: Status, _: &Request) -> Json<JsonErrorResponse> {
    Json(JsonErrorResponse {
        http_status: status.code,
        message: status.reason_lossy().to_string(),
    })
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
