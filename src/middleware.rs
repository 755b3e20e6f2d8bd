//! Request middleware: access logging and customer search dispatch.

use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpMessage, web};
use futures_util::future::LocalBoxFuture;
use log::info;

use crate::dto::customers::CustomerListing;
use crate::repository::CustomerReader;
use crate::services::customers as customer_service;

/// Logs the method and path of every request and hands it on unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        info!("Sending {} request to {}.", req.method(), req.path());
        self.service.call(req)
    }
}

/// Extracts the `search` query parameter; `?search=` yields `Some("")`.
///
/// A repeated parameter keeps its first value.
fn search_param(query_string: &str) -> Option<String> {
    web::Query::<Vec<(String, String)>>::from_query(query_string)
        .ok()?
        .into_inner()
        .into_iter()
        .find_map(|(key, value)| (key == "search").then_some(value))
}

/// Loads customers for listing views and stores them as a [`CustomerListing`]
/// in the request extensions.
///
/// With a `search` query parameter the customers are filtered by name,
/// otherwise every customer is loaded. Store failures become the response.
pub struct SearchCustomers<R> {
    repo: Arc<R>,
}

impl<R> SearchCustomers<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

impl<R> Clone for SearchCustomers<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<S, B, R> Transform<S, ServiceRequest> for SearchCustomers<R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: CustomerReader + Send + Sync + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SearchCustomersMiddleware<S, R>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SearchCustomersMiddleware {
            service: Rc::new(service),
            repo: Arc::clone(&self.repo),
        }))
    }
}

pub struct SearchCustomersMiddleware<S, R> {
    service: Rc<S>,
    repo: Arc<R>,
}

impl<S, B, R> Service<ServiceRequest> for SearchCustomersMiddleware<S, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    R: CustomerReader + Send + Sync + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let repo = Arc::clone(&self.repo);
        let search = search_param(req.query_string());

        Box::pin(async move {
            let term = search.clone();
            let customers = web::block(move || {
                customer_service::list_customers(repo.as_ref(), term.as_deref())
            })
            .await??;

            req.extensions_mut()
                .insert(CustomerListing { customers, search });

            service.call(req).await
        })
    }
}
