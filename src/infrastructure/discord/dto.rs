use serde::Deserialize;

use crate::domain::entities::{Channel, ChannelKind};

/// Discord API channel response structure.
#[derive(Debug, Deserialize)]
pub struct ChannelResponse {
    /// Channel snowflake.
    pub id: String,
    pub name: Option<String>,
    /// Raw channel type.
    #[serde(rename = "type", default)]
    pub kind: u8,
    pub parent_id: Option<String>,
    pub position: Option<i32>,
}

impl From<ChannelResponse> for Channel {
    fn from(response: ChannelResponse) -> Self {
        let mut channel = Self::new(response.id, ChannelKind::from(response.kind));
        if let Some(name) = response.name {
            channel = channel.with_name(name);
        }
        if let Some(parent_id) = response.parent_id {
            channel = channel.with_parent(parent_id);
        }
        if let Some(position) = response.position {
            channel = channel.with_position(position);
        }
        channel
    }
}

/// Discord API error response structure.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error message from Discord.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChannelId, Position};

    #[test]
    fn test_decode_channel_list() {
        let body = r#"[
            {"id": "1", "type": 4, "name": "General", "position": 0},
            {"id": "2", "type": 0, "name": "chat", "parent_id": "1", "position": 3},
            {"id": "3", "type": 2, "name": "Lounge", "parent_id": "1"}
        ]"#;

        let responses: Vec<ChannelResponse> = serde_json::from_str(body).unwrap();
        let channels: Vec<Channel> = responses.into_iter().map(Channel::from).collect();

        assert_eq!(channels[0].kind(), ChannelKind::Category);
        assert_eq!(channels[1].parent_id(), Some(&ChannelId::from("1")));
        assert_eq!(channels[1].position(), Position::Positioned(3));
        assert_eq!(channels[2].kind(), ChannelKind::Voice);
        assert_eq!(channels[2].position(), Position::Unpositioned);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let body = r#"{"id": "9", "type": 5, "name": null, "parent_id": null, "position": null}"#;

        let channel = Channel::from(serde_json::from_str::<ChannelResponse>(body).unwrap());

        assert_eq!(channel.kind(), ChannelKind::News);
        assert!(channel.name().is_none());
        assert!(channel.parent_id().is_none());
    }
}
