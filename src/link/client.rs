//! WebSocket-Client zur lokalen Mess-Bridge (`ws://host:port/ws`).
//!
//! Ein Hintergrund-Thread liest JSON-Text-Frames und reicht dekodierte
//! Ereignisse über einen Channel an die UI weiter. Bricht die Verbindung ab,
//! wird nach fester Wartezeit erneut verbunden, solange der Client lebt.

use super::message::{decode_text, LinkMessage};
use std::io::ErrorKind;
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tungstenite::client::IntoClientRequest;
use tungstenite::{Message, WebSocket};

/// Lese-Timeout, damit der Thread das Stop-Flag regelmäßig prüft.
const POLL_INTERVAL: Duration = Duration::from_millis(200);
/// Zeitlimit für TCP-Aufbau und Handshake.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Ereignis aus dem Verbindungs-Thread.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    /// Verbindung zur Bridge hergestellt
    Connected,
    /// Verbindung verloren oder Verbindungsversuch fehlgeschlagen
    Disconnected,
    /// Dekodierte Nachricht
    Message(LinkMessage),
}

/// Laufende Verbindung zur Mess-Bridge.
pub struct MeasurementLink {
    receiver: Receiver<LinkEvent>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl MeasurementLink {
    /// Startet den Verbindungs-Thread für die URL `address`.
    pub fn spawn(address: String, reconnect_delay: Duration) -> anyhow::Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = std::thread::Builder::new()
            .name("measurement-link".into())
            .spawn(move || run_link(&address, reconnect_delay, &sender, &thread_stop))?;

        Ok(Self {
            receiver,
            stop,
            handle: Some(handle),
        })
    }

    /// Holt alle bisher eingegangenen Ereignisse ohne zu blockieren.
    pub fn drain(&self) -> Vec<LinkEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }

    /// Signalisiert dem Thread das Ende und wartet auf ihn.
    pub fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Mess-Thread wurde mit Panic beendet");
            }
        }
    }
}

impl Drop for MeasurementLink {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_link(address: &str, reconnect_delay: Duration, sender: &Sender<LinkEvent>, stop: &AtomicBool) {
    log::info!("Mess-Bridge: verbinde mit {}", address);
    while !stop.load(Ordering::Relaxed) {
        match connect(address) {
            Ok(socket) => {
                log::info!("Mess-Bridge verbunden: {}", address);
                if sender.send(LinkEvent::Connected).is_err() {
                    return;
                }
                if let Err(e) = read_frames(socket, sender, stop) {
                    log::warn!("Mess-Bridge getrennt: {:#}", e);
                }
                if sender.send(LinkEvent::Disconnected).is_err() {
                    return;
                }
            }
            Err(e) => log::debug!("Mess-Bridge nicht erreichbar: {:#}", e),
        }
        sleep_unless_stopped(reconnect_delay, stop);
    }
    log::debug!("Mess-Thread beendet");
}

/// Baut TCP-Verbindung und WebSocket-Handshake auf. Nur `ws://` (ohne TLS).
fn connect(address: &str) -> anyhow::Result<WebSocket<TcpStream>> {
    let request = address.into_client_request()?;
    let uri = request.uri();
    if uri.scheme_str() != Some("ws") {
        anyhow::bail!("Nur ws://-Adressen werden unterstützt: {}", address);
    }
    let host = uri
        .host()
        .ok_or_else(|| anyhow::anyhow!("Kein Host in {}", address))?;
    let port = uri.port_u16().unwrap_or(80);
    let addr = (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| anyhow::anyhow!("Adresse nicht auflösbar: {}", address))?;

    let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)?;
    stream.set_read_timeout(Some(CONNECT_TIMEOUT))?;
    let (socket, _response) = tungstenite::client(request, stream)
        .map_err(|e| anyhow::anyhow!("WebSocket-Handshake fehlgeschlagen: {}", e))?;
    socket.get_ref().set_read_timeout(Some(POLL_INTERVAL))?;
    Ok(socket)
}

/// Liest Frames bis Close, Fehler oder Stop-Signal.
fn read_frames(
    mut socket: WebSocket<TcpStream>,
    sender: &Sender<LinkEvent>,
    stop: &AtomicBool,
) -> anyhow::Result<()> {
    while !stop.load(Ordering::Relaxed) {
        match socket.read() {
            Ok(Message::Text(text)) => match decode_text(&text) {
                Ok(Some(message)) => {
                    if sender.send(LinkEvent::Message(message)).is_err() {
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(e) => log::warn!("Ungültige Nachricht verworfen: {:#}", e),
            },
            Ok(Message::Close(_)) => anyhow::bail!("Verbindung vom Server geschlossen"),
            // Ping/Pong beantwortet tungstenite selbst, Binärdaten sendet die Bridge nicht.
            Ok(_) => {}
            // Timeout: angefangene Frames bleiben im Puffer von tungstenite
            Err(tungstenite::Error::Io(e))
                if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {}
            Err(e) => return Err(e.into()),
        }
    }
    if let Err(e) = socket.close(None) {
        log::debug!("Close-Frame nicht gesendet: {}", e);
    }
    Ok(())
}

fn sleep_unless_stopped(total: Duration, stop: &AtomicBool) {
    let mut waited = Duration::ZERO;
    while waited < total && !stop.load(Ordering::Relaxed) {
        let step = POLL_INTERVAL.min(total - waited);
        std::thread::sleep(step);
        waited += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::time::Instant;

    fn wait_for(link: &MeasurementLink, count: usize) -> Vec<LinkEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut events = Vec::new();
        while events.len() < count && Instant::now() < deadline {
            events.extend(link.drain());
            std::thread::sleep(Duration::from_millis(20));
        }
        events
    }

    /// Bridge-Attrappe: nimmt einen Client an und übergibt den Socket an `serve`.
    fn spawn_bridge<F>(serve: F) -> (String, JoinHandle<()>)
    where
        F: FnOnce(WebSocket<TcpStream>) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Port sollte frei sein");
        let address = format!(
            "ws://{}/ws",
            listener.local_addr().expect("Adresse erwartet")
        );
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().expect("Client erwartet");
            let socket = tungstenite::accept(stream).expect("Handshake sollte klappen");
            serve(socket);
        });
        (address, handle)
    }

    /// Wartet, bis der Client die Verbindung abbaut.
    fn drain_until_closed(socket: &mut WebSocket<TcpStream>) {
        while socket.read().is_ok() {}
    }

    #[test]
    fn receives_frames_and_reports_disconnect() {
        let (address, server) = spawn_bridge(|mut socket| {
            socket
                .send(Message::text(r#"{"type":"measure","value_m":1.5}"#))
                .expect("Senden sollte klappen");
            socket
                .send(Message::text(r#"{"type":"noise"}"#))
                .expect("Senden sollte klappen");
            socket.close(None).expect("Close sollte klappen");
            drain_until_closed(&mut socket);
        });

        let mut link =
            MeasurementLink::spawn(address, Duration::from_millis(1000)).expect("Thread startet");
        let events = wait_for(&link, 3);
        server.join().expect("Server-Thread");
        link.shutdown();

        assert_eq!(events.first(), Some(&LinkEvent::Connected));
        assert!(events.contains(&LinkEvent::Message(LinkMessage::Measure {
            value_m: 1.5,
            ts: None
        })));
        assert!(events.contains(&LinkEvent::Disconnected));
    }

    #[test]
    fn frame_split_inside_multibyte_char_survives_timeout() {
        let payload = r#"{"type":"ble_status","connected":true,"device_name":"Lasermesser Küche • GLM"}"#;
        let (address, server) = spawn_bridge(move |mut socket| {
            // Unmaskierter Text-Frame (FIN + Opcode 1), Länge < 126
            let mut frame = vec![0x81, payload.len() as u8];
            frame.extend_from_slice(payload.as_bytes());
            let split = 2 + payload.find('ü').expect("Umlaut erwartet") + 1;

            let stream = socket.get_mut();
            stream.write_all(&frame[..split]).expect("Schreiben sollte klappen");
            stream.flush().expect("Flush sollte klappen");
            std::thread::sleep(POLL_INTERVAL * 2);
            stream.write_all(&frame[split..]).expect("Schreiben sollte klappen");
            stream.flush().expect("Flush sollte klappen");
            drain_until_closed(&mut socket);
        });

        let mut link =
            MeasurementLink::spawn(address, Duration::from_millis(1000)).expect("Thread startet");
        let events = wait_for(&link, 2);
        link.shutdown();
        server.join().expect("Server-Thread");

        let Some(LinkEvent::Message(LinkMessage::BleStatus(status))) = events.get(1) else {
            panic!("Statusnachricht erwartet, erhalten: {:?}", events);
        };
        assert_eq!(status.device_name.as_deref(), Some("Lasermesser Küche • GLM"));
    }

    #[test]
    fn rejects_non_websocket_address() {
        assert!(connect("127.0.0.1:8765").is_err());
        assert!(connect("wss://127.0.0.1:8765/ws").is_err());
    }

    #[test]
    fn shutdown_without_server_returns() {
        let mut link =
            MeasurementLink::spawn("ws://127.0.0.1:1/ws".into(), Duration::from_millis(1000))
                .expect("Thread startet");
        link.shutdown();
        assert!(link.handle.is_none());
    }
}
