pub mod admin;
pub mod auth;
pub mod blog;
pub mod bookings;
pub mod contact;
pub mod destinations;
pub mod health;
pub mod packages;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
///
/// /destinations                      public list (?featured=true)
/// /destinations/{id}                 public detail
/// /packages                          public list (?destination_id=&tour_type=&q=)
/// /packages/{id}                     public detail
/// /blog                              published posts
/// /blog/{slug}                       published post by slug
/// /contact                           submit contact message (POST)
///
/// /bookings                          submit package booking (POST)
/// /bookings/inquiries                submit quick inquiry (POST)
///
/// /admin/users                       list, create (admin only)
/// /admin/users/{id}                  get, update, deactivate
/// /admin/users/{id}/reset-password   reset password
///
/// /admin/destinations                create (editor/admin)
/// /admin/destinations/{id}           update, delete
/// /admin/packages                    create (editor/admin)
/// /admin/packages/{id}               update, delete
/// /admin/blog                        list incl. drafts, create (editor/admin)
/// /admin/blog/{id}                   get, update, delete
/// /admin/messages                    list (?unread_only=true) (editor/admin)
/// /admin/messages/{id}               get (marks read), delete
/// /admin/uploads                     image upload (POST, multipart)
///
/// /admin/bookings                    list (?status=&q=&limit=&offset=) (admin only)
/// /admin/bookings/{id}               get, delete
/// /admin/bookings/{id}/status        update status (PUT, guarded transition)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Public catalog and content.
        .nest("/destinations", destinations::router())
        .nest("/packages", packages::router())
        .nest("/blog", blog::router())
        .nest("/contact", contact::router())
        // Public booking submission (both entry paths).
        .nest("/bookings", bookings::router())
        // Admin back-office.
        .nest("/admin/users", admin::router())
        .nest("/admin/destinations", destinations::admin_router())
        .nest("/admin/packages", packages::admin_router())
        .nest("/admin/blog", blog::admin_router())
        .nest("/admin/messages", contact::admin_router())
        .nest("/admin/uploads", uploads::router())
        .nest("/admin/bookings", bookings::admin_router())
}
