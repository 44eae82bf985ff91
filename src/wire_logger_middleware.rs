//! Transport wrappers that feed the wire logger
//!
//! `LoggingReader` and `LoggingWriter` wrap the server's stdin/stdout. Bytes
//! pass through untouched; complete LSP frames are decoded on the side and
//! handed to [`WireLogger`].

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};

use crate::wire_logger::{Direction, WireLogger};

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

fn content_length(headers: &str) -> Option<usize> {
    headers.split("\r\n").find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-length") {
            value.trim().parse::<usize>().ok()
        } else {
            None
        }
    })
}

/// Accumulates transport bytes and yields complete message bodies
#[derive(Debug, Default)]
struct FrameBuffer {
    bytes: Vec<u8>,
}

impl FrameBuffer {
    fn extend(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    /// Pops the next complete frame body, if the buffer holds one
    ///
    /// Header blocks without a usable `Content-Length` are dropped so that the
    /// frames behind them still get through.
    fn next_body(&mut self) -> Option<String> {
        loop {
            let header_len = self
                .bytes
                .windows(HEADER_TERMINATOR.len())
                .position(|window| window == HEADER_TERMINATOR)?;
            let body_start = header_len + HEADER_TERMINATOR.len();

            let body_end = std::str::from_utf8(&self.bytes[..header_len])
                .ok()
                .and_then(content_length)
                .and_then(|length| body_start.checked_add(length));
            let Some(body_end) = body_end else {
                self.bytes.drain(..body_start);
                continue;
            };

            if self.bytes.len() < body_end {
                return None;
            }

            let body = String::from_utf8_lossy(&self.bytes[body_start..body_end]).into_owned();
            self.bytes.drain(..body_end);
            return Some(body);
        }
    }

    fn drain_into(&mut self, logger: &WireLogger, direction: Direction) {
        while let Some(body) = self.next_body() {
            if let Ok(json) = serde_json::from_str::<Value>(&body) {
                match direction {
                    Direction::Incoming => logger.log_incoming(&json),
                    Direction::Outgoing => logger.log_outgoing(&json),
                }
            }
        }
    }
}

/// Wrapper around AsyncRead that logs incoming LSP messages
pub struct LoggingReader<R> {
    inner: R,
    wire_logger: WireLogger,
    frames: FrameBuffer,
}

impl<R> LoggingReader<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(inner: R, wire_logger: WireLogger) -> Self {
        Self { inner, wire_logger, frames: FrameBuffer::default() }
    }
}

impl<R> AsyncRead for LoggingReader<R>
where
    R: AsyncRead + Unpin,
{
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let before = buf.filled().len();
        let result = Pin::new(&mut self.inner).poll_read(cx, buf);

        if !self.wire_logger.is_enabled() {
            return result;
        }

        if let Poll::Ready(Ok(())) = &result {
            let this = &mut *self;
            let fresh = &buf.filled()[before..];
            if !fresh.is_empty() {
                this.frames.extend(fresh);
                this.frames.drain_into(&this.wire_logger, Direction::Incoming);
            }
        }

        result
    }
}

/// Wrapper around AsyncWrite that logs outgoing LSP messages
pub struct LoggingWriter<W> {
    inner: W,
    wire_logger: WireLogger,
    frames: FrameBuffer,
}

impl<W> LoggingWriter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(inner: W, wire_logger: WireLogger) -> Self {
        Self { inner, wire_logger, frames: FrameBuffer::default() }
    }
}

impl<W> AsyncWrite for LoggingWriter<W>
where
    W: AsyncWrite + Unpin,
{
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let result = Pin::new(&mut self.inner).poll_write(cx, buf);
        if !self.wire_logger.is_enabled() {
            return result;
        }

        if let Poll::Ready(Ok(written)) = &result {
            let this = &mut *self;
            this.frames.extend(&buf[..*written]);
            this.frames.drain_into(&this.wire_logger, Direction::Outgoing);
        }

        result
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_shutdown(cx)
    }
}
