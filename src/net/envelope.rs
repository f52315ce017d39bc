use bytemuck::{Pod, Zeroable};

use crate::error::SnapshotError;

/// Messages a client sends to the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ClientMessageType {
    Connection = 0,
    Disconnect = 1,
    Update = 2,
    Alive = 3,
}

/// Messages the relay delivers to a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ServerMessageType {
    Connection = 0,
    Disconnect = 1,
    Update = 2,
    Alive = 3,
    NewPlayer = 4,
}

impl TryFrom<u32> for ClientMessageType {
    type Error = SnapshotError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Connection,
            1 => Self::Disconnect,
            2 => Self::Update,
            3 => Self::Alive,
            other => return Err(SnapshotError::UnknownMessageType(other)),
        })
    }
}

impl TryFrom<u32> for ServerMessageType {
    type Error = SnapshotError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Connection,
            1 => Self::Disconnect,
            2 => Self::Update,
            3 => Self::Alive,
            4 => Self::NewPlayer,
            other => return Err(SnapshotError::UnknownMessageType(other)),
        })
    }
}

/// Fixed header preceding every payload
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct EnvelopeHeader {
    message_type: u32,
    sequence_index: i16,
    version: i16,
    payload_size: u32,
    reserved: u32,
    sender_player_id: i64,
}

pub const HEADER_SIZE: usize = std::mem::size_of::<EnvelopeHeader>();

/// One relay message. `message_type` is kept raw because its meaning
/// depends on the direction; see [`Envelope::server_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub message_type: u32,
    pub sender_player_id: i64,
    pub sequence_index: i16,
    pub version: i16,
    pub payload: Vec<u8>,
}

impl Envelope {
    pub fn client(message_type: ClientMessageType, sender_player_id: i64, sequence_index: i16, payload: Vec<u8>) -> Self {
        Self {
            message_type: message_type as u32,
            sender_player_id,
            sequence_index,
            version: 0,
            payload,
        }
    }

    pub fn server(message_type: ServerMessageType, sender_player_id: i64, sequence_index: i16, payload: Vec<u8>) -> Self {
        Self {
            message_type: message_type as u32,
            sender_player_id,
            sequence_index,
            version: 0,
            payload,
        }
    }

    pub fn server_type(&self) -> Result<ServerMessageType, SnapshotError> {
        ServerMessageType::try_from(self.message_type)
    }

    pub fn client_type(&self) -> Result<ClientMessageType, SnapshotError> {
        ClientMessageType::try_from(self.message_type)
    }

    pub fn encode(&self) -> Vec<u8> {
        let header = EnvelopeHeader {
            message_type: self.message_type,
            sequence_index: self.sequence_index,
            version: self.version,
            payload_size: self.payload.len() as u32,
            reserved: 0,
            sender_player_id: self.sender_player_id,
        };
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.payload.len());
        bytes.extend_from_slice(bytemuck::bytes_of(&header));
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        if bytes.len() < HEADER_SIZE {
            return Err(SnapshotError::WrongSize {
                expected: HEADER_SIZE,
                found: bytes.len(),
            });
        }
        let (head, payload) = bytes.split_at(HEADER_SIZE);
        let header: EnvelopeHeader = bytemuck::try_pod_read_unaligned(head).map_err(|_| SnapshotError::WrongSize {
            expected: HEADER_SIZE,
            found: head.len(),
        })?;

        if header.payload_size as usize != payload.len() {
            return Err(SnapshotError::PayloadSizeMismatch {
                declared: header.payload_size as usize,
                actual: payload.len(),
            });
        }

        Ok(Self {
            message_type: header.message_type,
            sender_player_id: header.sender_player_id,
            sequence_index: header.sequence_index,
            version: header.version,
            payload: payload.to_vec(),
        })
    }
}
