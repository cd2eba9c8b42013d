// grocery_api/src/web/mod.rs

pub mod handlers;
pub mod routes;

pub use routes::configure_app_routes;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};

use crate::state::AppState;

/// Assembles the application: shared state, request tracing, permissive CORS
/// and the `/api` routes.
pub fn build_app(
  app_state: AppState,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(web::Data::new(app_state))
    .wrap(Cors::permissive())
    .wrap(tracing_actix_web::TracingLogger::default())
    .configure(configure_app_routes)
}
