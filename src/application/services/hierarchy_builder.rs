//! Category hierarchy for a guild's channel list.

use std::cmp::Ordering;

use crate::domain::entities::Channel;

/// A category channel together with its ordered members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    /// The category channel.
    pub category: &'a Channel,
    /// Channels whose parent is the category, in display order.
    pub channels: Vec<&'a Channel>,
}

impl CategoryGroup<'_> {
    /// Returns the category name, or an empty string when unnamed.
    #[must_use]
    pub fn title(&self) -> &str {
        self.category.name().unwrap_or_default()
    }
}

/// Builds the category hierarchy of a flat channel list.
///
/// Only single-level nesting exists: top-level categories holding channels.
/// Channels that do not point at a top-level category are not part of the
/// hierarchy; [`HierarchyBuilder::unreachable`] reports them.
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    /// Groups channels under their categories, ordered for display.
    #[must_use]
    pub fn build(channels: &[Channel]) -> Vec<CategoryGroup<'_>> {
        Self::categories(channels)
            .into_iter()
            .map(|category| {
                let mut members: Vec<&Channel> = channels
                    .iter()
                    .filter(|c| c.parent_id() == Some(category.id()))
                    .collect();
                members.sort_by(|a, b| Self::compare_siblings(a, b));

                CategoryGroup {
                    category,
                    channels: members,
                }
            })
            .collect()
    }

    /// Returns channels that no category in the list can hold, in fetch order.
    #[must_use]
    pub fn unreachable(channels: &[Channel]) -> Vec<&Channel> {
        let categories = Self::categories(channels);

        channels
            .iter()
            .filter(|c| !categories.iter().any(|cat| cat.id() == c.id()))
            .filter(|c| {
                c.parent_id()
                    .is_none_or(|parent| !categories.iter().any(|cat| cat.id() == parent))
            })
            .collect()
    }

    /// Sibling order inside a category.
    ///
    /// Voice channels go after every non-voice channel. Within a bucket,
    /// positioned channels come first in ascending position, then the
    /// unpositioned ones. Remaining ties fall back to descending identifier,
    /// which keeps the order total.
    #[must_use]
    pub fn compare_siblings(a: &Channel, b: &Channel) -> Ordering {
        a.kind()
            .is_voice()
            .cmp(&b.kind().is_voice())
            .then_with(|| a.position().cmp_unpositioned_last(b.position()))
            .then_with(|| b.id().cmp(a.id()))
    }

    fn categories(channels: &[Channel]) -> Vec<&Channel> {
        let mut categories: Vec<&Channel> = channels
            .iter()
            .filter(|c| c.kind().is_category() && c.parent_id().is_none())
            .collect();
        // Stable: equal or missing positions keep fetch order.
        categories.sort_by(|a, b| a.position().cmp_unpositioned_last(b.position()));
        categories
    }
}
