// Live session - one WebSocket connection driving one shell
use crate::application::dashboard::Dashboard;
use crate::application::shell::Shell;
use crate::infrastructure::ticker::{next_tick, Ticker};
use crate::presentation::markup::render_layout;
use crate::presentation::protocol::{decode_client_message, ClientMessage, ProtocolError, ServerMessage};
use axum::extract::ws::{Message, WebSocket};
use futures::{Sink, SinkExt, Stream, StreamExt};
use std::fmt::Display;

/// Frames to send back after applying one client frame.
#[derive(Debug, Default)]
pub struct Reply {
    pub frames: Vec<String>,
    /// A new layout was mounted; the timer must be restarted or stopped.
    pub remounted: bool,
}

pub async fn run_session(socket: WebSocket, dashboard: Dashboard) {
    let (sender, receiver) = socket.split();
    drive_session(sender, receiver, dashboard.open_shell()).await;
}

/// Event loop of one session: client frames in, page and figure frames out.
///
/// The ticker only exists while the mounted page is live.
async fn drive_session<S, R, E>(mut sender: S, mut receiver: R, mut shell: Shell)
where
    S: Sink<Message> + Unpin,
    R: Stream<Item = Result<Message, E>> + Unpin,
    E: Display,
{
    let mut ticker: Option<Ticker> = None;

    tracing::info!("Live session opened");

    loop {
        let frames: Vec<String> = tokio::select! {
            _ = next_tick(&mut ticker) => tick_frames(&mut shell),
            msg = receiver.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    let reply = handle_text(&mut shell, &text);
                    if reply.remounted {
                        ticker = shell.refresh_period().map(Ticker::every);
                    }
                    reply.frames
                }
                Some(Ok(Message::Binary(_))) => error_frame(&ProtocolError::BinaryFrame).into_iter().collect(),
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => Vec::new(),
                Some(Err(e)) => {
                    tracing::debug!("Live session socket error: {}", e);
                    break;
                }
            },
        };

        for frame in frames {
            if sender.send(Message::Text(frame)).await.is_err() {
                tracing::debug!("Live session client went away mid-send");
                tracing::info!("Live session closed");
                return;
            }
        }
    }

    tracing::info!("Live session closed");
}

/// Apply one text frame from the client.
pub fn handle_text(shell: &mut Shell, text: &str) -> Reply {
    let msg = match decode_client_message(text) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Rejected client frame: {}", e);
            return Reply {
                frames: error_frame(&e).into_iter().collect(),
                remounted: false,
            };
        }
    };

    match msg {
        ClientMessage::Navigate { path } => {
            if !shell.navigate(&path) {
                return Reply::default();
            }
            let frames = shell
                .layout()
                .and_then(|layout| {
                    encode(&ServerMessage::Page {
                        path: &layout.path,
                        html: render_layout(layout),
                    })
                })
                .into_iter()
                .collect();
            Reply {
                frames,
                remounted: true,
            }
        }
        ClientMessage::SelectCostFunction { value } => {
            shell.select_cost_function(value);
            Reply::default()
        }
    }
}

/// Fire the shell's timer and encode every refreshed figure.
pub fn tick_frames(shell: &mut Shell) -> Vec<String> {
    shell
        .tick()
        .iter()
        .filter_map(|update| encode(&ServerMessage::figure(update)))
        .collect()
}

fn error_frame(error: &ProtocolError) -> Option<String> {
    encode(&ServerMessage::Error {
        message: error.to_string(),
    })
}

fn encode(msg: &ServerMessage<'_>) -> Option<String> {
    match serde_json::to_string(msg) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::error!("Failed to encode server message: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::router::PageRouter;
    use crate::application::testing::advancing_sampler;
    use crate::domain::page::CostFunction;
    use futures::channel::mpsc;
    use serde_json::Value;
    use std::time::Duration;

    fn shell() -> Shell {
        Dashboard::new(PageRouter::default(), advancing_sampler()).open_shell()
    }

    fn parse(frame: &str) -> Value {
        serde_json::from_str(frame).unwrap()
    }

    #[test]
    fn test_navigate_sends_page() {
        let mut shell = shell();
        let reply = handle_text(&mut shell, r#"{"type":"navigate","path":"/"}"#);

        assert!(reply.remounted);
        assert_eq!(reply.frames.len(), 1);
        let page = parse(&reply.frames[0]);
        assert_eq!(page["type"], "page");
        assert_eq!(page["path"], "/");
        assert!(page["html"].as_str().unwrap().contains("live-update-acquisition-function"));
        assert!(shell.is_live());
    }

    #[test]
    fn test_repeat_navigation_is_silent() {
        let mut shell = shell();
        handle_text(&mut shell, r#"{"type":"navigate","path":"/page-2"}"#);
        let reply = handle_text(&mut shell, r#"{"type":"navigate","path":"/page-2"}"#);

        assert!(!reply.remounted);
        assert!(reply.frames.is_empty());
    }

    #[test]
    fn test_ticks_stream_figures_only_on_home() {
        let mut shell = shell();
        handle_text(&mut shell, r#"{"type":"navigate","path":"/"}"#);

        let frames = tick_frames(&mut shell);
        assert_eq!(frames.len(), 2);
        let panels: Vec<String> = frames
            .iter()
            .map(|f| parse(f)["panel"].as_str().unwrap().to_string())
            .collect();
        assert!(panels.contains(&"live-update-graph".to_string()));
        assert!(panels.contains(&"live-update-acquisition-function".to_string()));

        handle_text(&mut shell, r#"{"type":"navigate","path":"/page-1"}"#);
        assert!(tick_frames(&mut shell).is_empty());
    }

    #[test]
    fn test_malformed_frame_gets_error_reply() {
        let mut shell = shell();
        let reply = handle_text(&mut shell, "{\"type\":");

        assert!(!reply.remounted);
        let error = parse(&reply.frames[0]);
        assert_eq!(error["type"], "error");
        assert!(error["message"].as_str().unwrap().starts_with("malformed client message"));
    }

    #[test]
    fn test_selection_is_recorded_without_reply() {
        let mut shell = shell();
        handle_text(&mut shell, r#"{"type":"navigate","path":"/"}"#);
        let reply = handle_text(&mut shell, r#"{"type":"select_cost_function","value":"RMSSD"}"#);

        assert!(reply.frames.is_empty());
        assert_eq!(shell.cost_function(), CostFunction::Rmssd);
    }

    fn navigate(path: &str) -> Result<Message, axum::Error> {
        Ok(Message::Text(format!(r#"{{"type":"navigate","path":"{}"}}"#, path)))
    }

    async fn next_frame(frames: &mut mpsc::UnboundedReceiver<Message>) -> Value {
        match frames.next().await {
            Some(Message::Text(text)) => parse(&text),
            other => panic!("expected a text frame, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_ticks_only_while_home_is_mounted() {
        let (client_tx, client_rx) = mpsc::unbounded::<Result<Message, axum::Error>>();
        let (server_tx, mut server_rx) = mpsc::unbounded::<Message>();
        let session = tokio::spawn(drive_session(server_tx, client_rx, shell()));

        client_tx.unbounded_send(navigate("/")).unwrap();
        assert_eq!(next_frame(&mut server_rx).await["type"], "page");

        // Paused clock auto-advances to the first tick
        let first = next_frame(&mut server_rx).await;
        let second = next_frame(&mut server_rx).await;
        assert_eq!(first["type"], "figure");
        assert_eq!(second["type"], "figure");
        assert_eq!(first["n_intervals"], 1);
        assert_ne!(first["panel"], second["panel"]);

        client_tx.unbounded_send(navigate("/page-1")).unwrap();
        let page = next_frame(&mut server_rx).await;
        assert_eq!(page["type"], "page");
        assert_eq!(page["path"], "/page-1");

        let quiet = tokio::time::timeout(Duration::from_secs(30), server_rx.next()).await;
        assert!(quiet.is_err(), "no frames expected off the home page");

        client_tx.unbounded_send(navigate("/")).unwrap();
        assert_eq!(next_frame(&mut server_rx).await["type"], "page");
        let restarted = next_frame(&mut server_rx).await;
        assert_eq!(restarted["n_intervals"], 1);

        drop(client_tx);
        session.await.unwrap();
    }
}
