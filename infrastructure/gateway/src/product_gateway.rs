use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::{Product, ProductFields};
use business::domain::product::value_objects::ProductId;

use crate::client::ApiClient;
use crate::dto::{ProductFieldsPayload, decode_product, decode_product_list, server_message};

/// REST adapter for the `/products` resource.
pub struct ProductGatewayHttp {
    client: ApiClient,
}

impl ProductGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "inventory response");

        if status.is_success() {
            return Ok(response);
        }

        // The body is only read for a server message; failing to read it is not fatal.
        let body = response.text().await.unwrap_or_default();
        Err(GatewayError::http(status.as_u16(), server_message(&body)))
    }

    async fn read_json(response: Response) -> Result<Value, GatewayError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::decode(e.to_string()))
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self
            .send(self.client.client.get(self.client.products_url()))
            .await?;
        decode_product_list(Self::read_json(response).await?)
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, GatewayError> {
        let response = self
            .send(self.client.client.get(self.client.product_url(id.as_str())))
            .await?;
        decode_product(Self::read_json(response).await?)
    }

    async fn create(&self, fields: &ProductFields) -> Result<Product, GatewayError> {
        let response = self
            .send(
                self.client
                    .client
                    .post(self.client.products_url())
                    .json(&ProductFieldsPayload::from(fields)),
            )
            .await?;
        decode_product(Self::read_json(response).await?)
    }

    async fn update(
        &self,
        id: &ProductId,
        fields: &ProductFields,
    ) -> Result<Product, GatewayError> {
        let response = self
            .send(
                self.client
                    .client
                    .put(self.client.product_url(id.as_str()))
                    .json(&ProductFieldsPayload::from(fields)),
            )
            .await?;

        // Some services answer 204 to a PUT; the sent fields are then authoritative.
        if response.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(Product::from_fields(id.clone(), fields.clone()));
        }
        decode_product(Self::read_json(response).await?)
    }

    async fn delete_by_id(&self, id: &ProductId) -> Result<(), GatewayError> {
        self.send(
            self.client
                .client
                .delete(self.client.product_url(id.as_str())),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;
    use url::Url;

    /// Answers exactly one request with `status` and `body`, returning the raw request.
    async fn stub_service(status: &'static str, body: &'static str) -> (ProductGatewayHttp, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        let base_url = Url::parse(&format!("http://{}/api", addr)).unwrap();
        (ProductGatewayHttp::new(ApiClient::for_loopback(base_url)), server)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + body_len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn apple_fields() -> ProductFields {
        ProductFields {
            barcode: "123".to_string(),
            description: "Apple".to_string(),
            price: 1.5,
            quantity: 10,
            category: Some("Fruits".to_string()),
        }
    }

    #[tokio::test]
    async fn should_decode_list_when_service_answers_with_array() {
        let (gateway, server) = stub_service(
            "200 OK",
            r#"[{"id": 1, "barcode": "123", "description": "Apple", "price": "1.50", "quantity": 10, "category": "Fruits"}]"#,
        )
        .await;

        let products = gateway.list().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.to_string(), "1.50");
        assert!(server.await.unwrap().starts_with("GET /api/products HTTP/1.1"));
    }

    #[tokio::test]
    async fn should_return_http_error_when_product_is_missing() {
        let (gateway, server) = stub_service("404 Not Found", "").await;

        let result = gateway.delete_by_id(&ProductId::from(42)).await;

        assert_eq!(result, Err(GatewayError::http(404, None)));
        assert!(server.await.unwrap().starts_with("DELETE /api/products/42 HTTP/1.1"));
    }

    #[tokio::test]
    async fn should_carry_server_message_when_create_is_rejected() {
        let (gateway, server) = stub_service(
            "422 Unprocessable Entity",
            r#"{"message": "Barcode already exists"}"#,
        )
        .await;

        let result = gateway.create(&apple_fields()).await;

        assert_eq!(
            result,
            Err(GatewayError::http(422, Some("Barcode already exists".to_string())))
        );
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/products HTTP/1.1"));
        assert!(request.contains(r#""price":1.5"#));
        assert!(request.contains(r#""quantity":10"#));
    }

    #[tokio::test]
    async fn should_return_sent_fields_when_update_answers_no_content() {
        let (gateway, server) = stub_service("204 No Content", "").await;

        let updated = gateway
            .update(&ProductId::from(7), &apple_fields())
            .await
            .unwrap();

        assert_eq!(updated, Product::from_fields(ProductId::from(7), apple_fields()));
        assert!(server.await.unwrap().starts_with("PUT /api/products/7 HTTP/1.1"));
    }

    #[tokio::test]
    async fn should_acknowledge_delete_when_body_is_empty() {
        let (gateway, server) = stub_service("200 OK", "").await;

        let result = gateway.delete_by_id(&ProductId::from(7)).await;

        assert_eq!(result, Ok(()));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn should_report_decode_error_when_list_shape_is_unexpected() {
        let (gateway, server) = stub_service("200 OK", r#"{"foo": 1}"#).await;

        let result = gateway.list().await;

        assert!(matches!(result, Err(GatewayError::Decode(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn should_report_network_error_when_service_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let base_url = Url::parse(&format!("http://{}/api", addr)).unwrap();
        let gateway = ProductGatewayHttp::new(ApiClient::for_loopback(base_url));

        let result = gateway.list().await;

        assert!(matches!(result, Err(GatewayError::Network(_))));
    }
}
