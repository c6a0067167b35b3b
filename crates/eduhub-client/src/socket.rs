//! Websocket client for the admin chat surface.

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use eduhub_core::error::ErrorKind;
use eduhub_core::types::GroupId;
use eduhub_core::{AppError, AppResult};
use eduhub_entity::chat::{Attachment, ClientEvent, ServerEvent};

/// A connected chat socket.
///
/// Events are JSON frames shaped `{"event": "...", "data": {...}}` in both
/// directions. Frames that fail to parse are logged and skipped rather
/// than tearing the connection down.
pub struct ChatSocket {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl ChatSocket {
    /// Connect, carrying the bearer token as a query parameter when
    /// present.
    pub async fn connect(url: &str, token: Option<&str>) -> AppResult<Self> {
        let full_url = match token {
            Some(token) => format!("{url}?token={token}"),
            None => url.to_string(),
        };
        let (stream, _) = connect_async(full_url.as_str()).await.map_err(|e| {
            AppError::with_source(ErrorKind::Chat, format!("Socket connect failed: {e}"), e)
        })?;
        tracing::debug!("Chat socket connected to {url}");
        Ok(Self { stream })
    }

    /// Send a client event.
    pub async fn send(&mut self, event: &ClientEvent) -> AppResult<()> {
        let payload = serde_json::to_string(event)?;
        self.stream
            .send(Message::Text(payload.into()))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Chat, format!("Socket send failed: {e}"), e)
            })
    }

    /// Subscribe to a group's events.
    pub async fn join(&mut self, group_id: GroupId) -> AppResult<()> {
        self.send(&ClientEvent::JoinGroup { group_id }).await
    }

    /// Send a message into a group.
    pub async fn send_message(
        &mut self,
        group_id: GroupId,
        message: Option<String>,
        attachment: Option<Attachment>,
    ) -> AppResult<()> {
        self.send(&ClientEvent::SendMessage {
            group_id,
            message,
            attachment,
        })
        .await
    }

    /// Next server event, or `None` once the peer closes the connection.
    pub async fn next_event(&mut self) -> AppResult<Option<ServerEvent>> {
        while let Some(frame) = self.stream.next().await {
            let frame = frame.map_err(|e| {
                AppError::with_source(ErrorKind::Chat, format!("Socket read failed: {e}"), e)
            })?;
            match frame {
                Message::Text(raw) => match serde_json::from_str::<ServerEvent>(raw.as_str()) {
                    Ok(event) => return Ok(Some(event)),
                    Err(err) => {
                        tracing::debug!("Skipping unparseable chat frame: {err}");
                    }
                },
                Message::Ping(payload) => {
                    self.stream
                        .send(Message::Pong(payload))
                        .await
                        .map_err(|e| {
                            AppError::with_source(
                                ErrorKind::Chat,
                                format!("Socket pong failed: {e}"),
                                e,
                            )
                        })?;
                }
                Message::Close(_) => return Ok(None),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Close the socket.
    pub async fn close(&mut self) -> AppResult<()> {
        self.stream.close(None).await.map_err(|e| {
            AppError::with_source(ErrorKind::Chat, format!("Socket close failed: {e}"), e)
        })
    }
}
