//! Browser bindings: Cache API stores and the service-worker event loop

use std::rc::Rc;

use async_trait::async_trait;
use log::{error, info, LevelFilter};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    Cache, Event, ExtendableEvent, FetchEvent, Request, Response, ServiceWorkerGlobalScope,
};

use crate::config::WorkerConfig;
use crate::error::CacheError;
use crate::lifecycle::{activate, install};
use crate::policy::{should_intercept, RequestInfo};
use crate::store::{CacheStorage, CacheStore, CachedResponse, Network};
use crate::strategy::respond;

fn js_error(value: JsValue) -> CacheError {
    CacheError::Storage(format!("{:?}", value))
}

fn to_js(err: CacheError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

impl CachedResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self)
    }

    fn duplicate(&self) -> Result<Self, CacheError> {
        Response::clone(self).map_err(js_error)
    }
}

struct WebCache(Cache);

#[async_trait(?Send)]
impl CacheStore for WebCache {
    type Response = Response;

    async fn lookup(&self, request: &RequestInfo) -> Result<Option<Response>, CacheError> {
        if !request.method.eq_ignore_ascii_case("GET") {
            return Ok(None);
        }
        let found = JsFuture::from(self.0.match_with_str(&request.url))
            .await
            .map_err(js_error)?;
        if found.is_undefined() || found.is_null() {
            return Ok(None);
        }
        found.dyn_into::<Response>().map(Some).map_err(js_error)
    }

    async fn put(&self, request: &RequestInfo, response: Response) -> Result<(), CacheError> {
        JsFuture::from(self.0.put_with_str(&request.url, &response))
            .await
            .map_err(js_error)?;
        Ok(())
    }
}

struct WebStorage(web_sys::CacheStorage);

#[async_trait(?Send)]
impl CacheStorage for WebStorage {
    type Store = WebCache;

    async fn open(&self, name: &str) -> Result<WebCache, CacheError> {
        let cache = JsFuture::from(self.0.open(name)).await.map_err(js_error)?;
        cache.dyn_into::<Cache>().map(WebCache).map_err(js_error)
    }

    async fn keys(&self) -> Result<Vec<String>, CacheError> {
        let keys = JsFuture::from(self.0.keys()).await.map_err(js_error)?;
        let keys: js_sys::Array = keys.dyn_into().map_err(js_error)?;
        Ok(keys.iter().filter_map(|key| key.as_string()).collect())
    }

    async fn delete(&self, name: &str) -> Result<bool, CacheError> {
        let deleted = JsFuture::from(self.0.delete(name)).await.map_err(js_error)?;
        Ok(deleted.as_bool().unwrap_or(false))
    }
}

/// Fetches through the worker scope. `intercepted` keeps the fetch event's
/// request so headers and credentials survive the round trip.
struct WebNetwork {
    scope: ServiceWorkerGlobalScope,
    intercepted: Option<Request>,
}

#[async_trait(?Send)]
impl Network for WebNetwork {
    type Response = Response;

    async fn fetch(&self, request: &RequestInfo) -> Result<Response, CacheError> {
        let promise = match &self.intercepted {
            Some(event_request) => self.scope.fetch_with_request(event_request),
            None => self.scope.fetch_with_str(&request.url),
        };
        let network_error = |value: JsValue| CacheError::Network {
            url: request.url.clone(),
            reason: format!("{:?}", value),
        };
        let response = JsFuture::from(promise).await.map_err(network_error)?;
        response.dyn_into::<Response>().map_err(network_error)
    }
}

fn storage(scope: &ServiceWorkerGlobalScope) -> Result<WebStorage, JsValue> {
    scope.caches().map(WebStorage)
}

fn listen(scope: &ServiceWorkerGlobalScope, name: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    let listener = callback.as_ref().unchecked_ref();
    if let Err(err) = scope.add_event_listener_with_callback(name, listener) {
        error!("[SW] could not listen for {}: {:?}", name, err);
    }
    callback.forget();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = rolling_logger::init(LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY);

    let scope: ServiceWorkerGlobalScope = js_sys::global().unchecked_into();
    let config = Rc::new(WorkerConfig::default());

    {
        let scope = scope.clone();
        let config = Rc::clone(&config);
        listen(&scope.clone(), "install", move |event: Event| {
            let event: ExtendableEvent = event.unchecked_into();
            let scope = scope.clone();
            let config = Rc::clone(&config);
            let work = future_to_promise(async move {
                let storage = storage(&scope)?;
                let network = WebNetwork { scope: scope.clone(), intercepted: None };
                install(&storage, &network, &config).await.map_err(to_js)?;
                Ok(JsValue::UNDEFINED)
            });
            if let Err(err) = event.wait_until(&work) {
                error!("[SW] install wait_until failed: {:?}", err);
            }
            if let Err(err) = scope.skip_waiting() {
                error!("[SW] skip_waiting failed: {:?}", err);
            }
        });
    }

    {
        let scope = scope.clone();
        let config = Rc::clone(&config);
        listen(&scope.clone(), "activate", move |event: Event| {
            let event: ExtendableEvent = event.unchecked_into();
            let scope = scope.clone();
            let config = Rc::clone(&config);
            let work = future_to_promise(async move {
                let storage = storage(&scope)?;
                activate(&storage, &config).await.map_err(to_js)?;
                JsFuture::from(scope.clients().claim()).await?;
                Ok(JsValue::UNDEFINED)
            });
            if let Err(err) = event.wait_until(&work) {
                error!("[SW] activate wait_until failed: {:?}", err);
            }
        });
    }

    {
        let scope = scope.clone();
        let config = Rc::clone(&config);
        listen(&scope.clone(), "fetch", move |event: Event| {
            let event: FetchEvent = event.unchecked_into();
            let request = event.request();
            let info = RequestInfo {
                method: request.method(),
                url: request.url(),
            };
            if !should_intercept(&config, &info) {
                return;
            }
            let scope = scope.clone();
            let config = Rc::clone(&config);
            let answer = future_to_promise(async move {
                let cache = storage(&scope)?.open(&config.cache_name).await.map_err(to_js)?;
                let network = WebNetwork { scope, intercepted: Some(request) };
                let response = respond(&cache, &network, &info).await.map_err(to_js)?;
                Ok(response.into())
            });
            if let Err(err) = event.respond_with(&answer) {
                error!("[SW] respond_with failed: {:?}", err);
            }
        });
    }

    info!("[SW] worker started, cache {}", config.cache_name);
}
