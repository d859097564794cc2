//! VRChat chatbox client: fire-and-forget OSC datagrams.
//!
//! No acknowledgment is read; a datagram either lands or it doesn't.

use anyhow::Context;
use rosc::{encoder, OscMessage, OscPacket, OscType};
use tokio::net::UdpSocket;
use tracing::debug;

/// VRChat listens for OSC input on localhost.
const VRCHAT_OSC_ADDR: &str = "127.0.0.1:9000";
const CHATBOX_INPUT: &str = "/chatbox/input";

pub struct ChatboxClient {
    socket: UdpSocket,
}

impl ChatboxClient {
    pub async fn connect() -> anyhow::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0")
            .await
            .context("binding OSC send socket")?;
        socket
            .connect(VRCHAT_OSC_ADDR)
            .await
            .context("connecting to VRChat OSC endpoint")?;
        Ok(Self { socket })
    }

    /// Display `body` in the chatbox: bypass the in-game keyboard, skip the
    /// notification sound.
    pub async fn send(&self, body: &str) -> anyhow::Result<()> {
        self.transmit(chatbox_input(vec![
            OscType::String(body.to_owned()),
            OscType::Bool(true),
            OscType::Bool(false),
        ]))
        .await
    }

    /// Wipe the chatbox.
    pub async fn clear(&self) -> anyhow::Result<()> {
        self.transmit(chatbox_input(vec![
            OscType::String(String::new()),
            OscType::Bool(true),
        ]))
        .await
    }

    async fn transmit(&self, packet: OscPacket) -> anyhow::Result<()> {
        let bytes = encoder::encode(&packet).context("encoding OSC packet")?;
        self.socket
            .send(&bytes)
            .await
            .context("sending OSC datagram")?;
        debug!("[osc] sent {} bytes to {}", bytes.len(), VRCHAT_OSC_ADDR);
        Ok(())
    }
}

fn chatbox_input(args: Vec<OscType>) -> OscPacket {
    OscPacket::Message(OscMessage {
        addr: CHATBOX_INPUT.to_string(),
        args,
    })
}
