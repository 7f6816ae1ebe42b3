//! Initial channel selection for a freshly fetched channel list.

use crate::domain::entities::{Channel, ChannelId};

/// Picks the channel to open when a guild's channels finish loading.
pub struct SelectionResolver;

impl SelectionResolver {
    /// Resolves the initial selection.
    ///
    /// A remembered channel wins whenever it is still in the list, whatever
    /// its kind. Otherwise the first text channel in fetch order is chosen,
    /// which can differ from the first text channel in display order.
    #[must_use]
    pub fn resolve(channels: &[Channel], remembered: Option<&ChannelId>) -> Option<ChannelId> {
        if let Some(remembered) = remembered
            && channels.iter().any(|c| c.id() == remembered)
        {
            return Some(remembered.clone());
        }

        channels
            .iter()
            .find(|c| c.kind().is_text())
            .map(|c| c.id().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ChannelKind;

    fn sample_guild() -> Vec<Channel> {
        vec![
            Channel::new("c1", ChannelKind::Category)
                .with_name("General")
                .with_position(0),
            Channel::new("c2", ChannelKind::Text)
                .with_parent("c1")
                .with_position(0),
            Channel::new("c3", ChannelKind::Voice)
                .with_parent("c1")
                .with_position(1),
        ]
    }

    #[test]
    fn test_defaults_to_first_text_channel() {
        let selection = SelectionResolver::resolve(&sample_guild(), None);
        assert_eq!(selection, Some(ChannelId::from("c2")));
    }

    #[test]
    fn test_remembered_voice_channel_is_restored() {
        let remembered = ChannelId::from("c3");
        let selection = SelectionResolver::resolve(&sample_guild(), Some(&remembered));
        assert_eq!(selection, Some(remembered));
    }

    #[test]
    fn test_missing_remembered_channel_falls_back() {
        let remembered = ChannelId::from("deleted");
        let selection = SelectionResolver::resolve(&sample_guild(), Some(&remembered));
        assert_eq!(selection, Some(ChannelId::from("c2")));
    }

    #[test]
    fn test_fallback_uses_fetch_order_not_display_order() {
        let channels = vec![
            Channel::new("cat", ChannelKind::Category).with_position(0),
            Channel::new("late", ChannelKind::Text)
                .with_parent("cat")
                .with_position(5),
            Channel::new("early", ChannelKind::Text)
                .with_parent("cat")
                .with_position(0),
        ];

        let selection = SelectionResolver::resolve(&channels, None);
        assert_eq!(selection, Some(ChannelId::from("late")));
    }

    #[test]
    fn test_no_text_channels_selects_nothing() {
        let channels = vec![
            Channel::new("cat", ChannelKind::Category),
            Channel::new("news", ChannelKind::News).with_parent("cat"),
            Channel::new("voice", ChannelKind::Voice).with_parent("cat"),
        ];

        assert_eq!(SelectionResolver::resolve(&channels, None), None);
        assert_eq!(
            SelectionResolver::resolve(&channels, Some(&ChannelId::from("gone"))),
            None
        );
        assert_eq!(SelectionResolver::resolve(&[], None), None);
    }
}
