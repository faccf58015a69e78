use crate::connector::connector::INVALID_SNI_BODY;
use crate::connector::enums::guard_decision::GuardDecision;
use crate::connector::structs::guard_settings::GuardSettings;
use crate::connector::structs::http_guard::HttpGuard;
use crate::connector::structs::http_guard_middleware::HttpGuardMiddleware;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::http::header::ContentType;
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;
use log::debug;
use std::future::{ready, Ready};
use std::sync::Arc;

impl HttpGuard {
    pub fn new(settings: GuardSettings) -> Self {
        Self { settings: Arc::new(settings) }
    }

    /// A guard that lets every request through.
    pub fn disabled() -> Self {
        Self::new(GuardSettings::default())
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }
}

impl<S, B> Transform<S, ServiceRequest> for HttpGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = HttpGuardMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HttpGuardMiddleware {
            service,
            settings: self.settings.clone(),
        }))
    }
}

fn request_host(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .or_else(|| req.uri().authority().map(|authority| authority.to_string()))
}

impl<S, B> Service<ServiceRequest> for HttpGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let decision = {
            let secure = req.app_config().secure();
            let host = request_host(&req);
            let path_and_query = req.uri().path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
            self.settings.decide(secure, host.as_deref(), path_and_query)
        };

        match decision {
            GuardDecision::Pass => {
                let future = self.service.call(req);
                Box::pin(async move { future.await.map(ServiceResponse::map_into_left_body) })
            }
            GuardDecision::Redirect(location) => {
                debug!("[CONNECTOR] Redirecting {} to {}", req.uri(), location);
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, location))
                    .finish();
                Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
            }
            GuardDecision::InvalidSni => {
                debug!("[CONNECTOR] Rejecting request for foreign host on the secure listener");
                let response = HttpResponse::BadRequest()
                    .content_type(ContentType::plaintext())
                    .body(INVALID_SNI_BODY);
                Box::pin(ready(Ok(req.into_response(response).map_into_right_body())))
            }
        }
    }
}
