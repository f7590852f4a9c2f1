//! HTTP implementation of [`ItemRepository`] on top of reqwest.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;

use super::ItemRepository;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Envelope, Item, ItemPatch, NewItem};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub struct HttpItemRepository {
    client: Client,
    config: ClientConfig,
}

impl HttpItemRepository {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn item_path(id: &str) -> String {
        format!("/api/items/{}", utf8_percent_encode(id, PATH_SEGMENT))
    }

    /// One request, no retries. Only transport failures are errors here.
    async fn send_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<(u16, String)> {
        let url = self.config.url(path);
        log::debug!("{} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok((status, text))
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Envelope> {
        let (status, text) = self.send_raw(method, path, body).await?;
        decode_envelope(status, &text)
    }
}

/// Decode the `{ok, ...}` envelope, turning `ok: false` into a service error
/// that carries the message exactly as sent.
fn decode_envelope(status: u16, body: &str) -> ClientResult<Envelope> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            return Err(ClientError::Decode(format!("HTTP {}: {}", status, e)));
        }
    };
    if envelope.ok {
        return Ok(envelope);
    }
    let message = envelope
        .message
        .unwrap_or_else(|| format!("Request failed (HTTP {})", status));
    Err(ClientError::service(status, message))
}

/// A 404 on `get` means the id is unknown, whatever the body looked like.
/// Transport failures and other statuses pass through.
fn map_get_error(id: &str, status: u16, err: ClientError) -> ClientError {
    match err {
        ClientError::Service { .. } | ClientError::Decode(_)
            if status == StatusCode::NOT_FOUND.as_u16() =>
        {
            ClientError::not_found(id)
        }
        other => other,
    }
}

fn missing(field: &str) -> ClientError {
    ClientError::Decode(format!("response is missing `{}`", field))
}

fn require_item(envelope: Envelope) -> ClientResult<Item> {
    envelope.item.ok_or_else(|| missing("item"))
}

#[async_trait(?Send)]
impl ItemRepository for HttpItemRepository {
    async fn list(&self) -> ClientResult<Vec<Item>> {
        let envelope = self.send::<()>(Method::GET, "/api/items", None).await?;
        envelope.items.ok_or_else(|| missing("items"))
    }

    async fn get(&self, id: &str) -> ClientResult<Item> {
        let (status, text) = self.send_raw::<()>(Method::GET, &Self::item_path(id), None).await?;
        let envelope = decode_envelope(status, &text).map_err(|e| map_get_error(id, status, e))?;
        require_item(envelope)
    }

    async fn create(&self, fields: &NewItem) -> ClientResult<Item> {
        let envelope = self.send(Method::POST, "/api/items", Some(fields)).await?;
        require_item(envelope)
    }

    async fn update(&self, id: &str, patch: &ItemPatch) -> ClientResult<Item> {
        let envelope = self.send(Method::PUT, &Self::item_path(id), Some(patch)).await?;
        require_item(envelope)
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        self.send::<()>(Method::DELETE, &Self::item_path(id), None).await?;
        Ok(())
    }

    async fn export_csv(&self) -> ClientResult<String> {
        let envelope = self.send::<()>(Method::GET, "/api/export", None).await?;
        envelope.csv.ok_or_else(|| missing("csv"))
    }
}
