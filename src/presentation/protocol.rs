// WebSocket wire format between the browser and a session
use crate::application::shell::FigureUpdate;
use crate::domain::figure::Figure;
use crate::domain::page::CostFunction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Navigate { path: String },
    SelectCostFunction { value: CostFunction },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage<'a> {
    Page {
        path: &'a str,
        html: String,
    },
    Figure {
        panel: &'static str,
        n_intervals: u64,
        figure: &'a Figure,
    },
    Error {
        message: String,
    },
}

impl<'a> ServerMessage<'a> {
    pub fn figure(update: &'a FigureUpdate) -> Self {
        ServerMessage::Figure {
            panel: update.panel.element_id(),
            n_intervals: update.n_intervals,
            figure: &update.figure,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed client message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("binary frames are not supported")]
    BinaryFrame,
}

pub fn decode_client_message(text: &str) -> Result<ClientMessage, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}
