use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
    Response,
    StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::OrderServerConfig,
    data_objects::{Order, OrderRequest},
    OrderApiError,
};

/// Thin client over the order management REST resources. One method per server operation; no retries, no caching.
/// Failures come back as [`OrderApiError`] values carrying the server's own rejection text where it sent one.
#[derive(Clone)]
pub struct OrderApi {
    config: OrderServerConfig,
    client: Arc<Client>,
}

impl OrderApi {
    pub fn new(config: OrderServerConfig) -> Result<Self, OrderApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent("Order Console")
            .default_headers(headers)
            .build()
            .map_err(|e| OrderApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn server_url(&self) -> &str {
        &self.config.server_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.config.server_url)
    }

    async fn send_request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<Response, OrderApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| OrderApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| OrderApiError::RestResponseError(e.to_string()))?;
            Err(OrderApiError::QueryError { status, message })
        }
    }

    async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, OrderApiError> {
        let response = self.send_request(method, path, body).await?;
        response.json::<T>().await.map_err(|e| OrderApiError::JsonError(e.to_string()))
    }

    /// Fetch every order, in the order the server returns them.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderApiError> {
        debug!("Fetching order list");
        let orders = self.rest_query::<Vec<Order>, ()>(Method::GET, "/orders", None).await?;
        info!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    /// Fetch a single order. A 404 is not an error here; it maps to `None`.
    pub async fn order_by_id(&self, id: i64) -> Result<Option<Order>, OrderApiError> {
        debug!("Fetching order #{id}");
        match self.rest_query::<Order, ()>(Method::GET, &format!("/orders/{id}"), None).await {
            Ok(order) => Ok(Some(order)),
            Err(OrderApiError::QueryError { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Place a new order. The server assigns the id; the success body is not consumed. Callers re-fetch the
    /// authoritative list after any mutation.
    pub async fn create_order(&self, order: &OrderRequest) -> Result<(), OrderApiError> {
        debug!("Creating order for {}", order.customer_name);
        self.send_request(Method::POST, "/orders", Some(order)).await?;
        info!("Created order for {}", order.customer_name);
        Ok(())
    }

    pub async fn update_order(&self, id: i64, order: &OrderRequest) -> Result<(), OrderApiError> {
        debug!("Updating order #{id}");
        self.send_request(Method::PUT, &format!("/orders/{id}"), Some(order)).await?;
        info!("Updated order #{id}");
        Ok(())
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), OrderApiError> {
        debug!("Deleting order #{id}");
        self.send_request::<()>(Method::DELETE, &format!("/orders/{id}"), None).await?;
        info!("Deleted order #{id}");
        Ok(())
    }
}
