//! Channel enumeration and classification
//!
//! Turns raw listing entries into [`ExportedChannel`] values with a derived
//! export name. Naming is a pure function of the listing entry, so repeated
//! runs place a channel under the same directory.

use tracing::error;

use crate::batch::load_batch;
use crate::client::types::{ContactDetails, DirectChannelEntry};
use crate::client::SpaceClient;
use crate::error::Result;
use crate::types::{ChannelKind, ExportedChannel};

/// Enumerate all named group channels visible to the user
pub async fn fetch_group_channels(client: &SpaceClient) -> Result<Vec<ExportedChannel>> {
    let entries = load_batch(|batch| client.list_all_channels(batch)).await?;
    Ok(entries
        .into_iter()
        .map(|entry| ExportedChannel::new(entry.channel_id, entry.name, ChannelKind::GroupChannel))
        .collect())
}

/// Enumerate direct-message and conversation channels visible to the user
///
/// Entries with an unrecognized contact-details variant are logged and
/// skipped; the run continues.
pub async fn fetch_direct_channels(client: &SpaceClient) -> Result<Vec<ExportedChannel>> {
    let entries = load_batch(|batch| client.list_direct_channels(batch)).await?;
    Ok(entries
        .into_iter()
        .filter_map(classify_direct_channel)
        .collect())
}

/// Derive the export name of a direct channel from its contact details.
///
/// - `Profile`: the user's username, or `user-<userId>` when blank
/// - `Conversation`: the subject when non-empty, else the `_`-joined
///   participant usernames, else `conversation-<channelId>`
/// - anything else: recorded and excluded from the export
pub fn classify_direct_channel(entry: DirectChannelEntry) -> Option<ExportedChannel> {
    let name = match &entry.details {
        ContactDetails::Profile { user } => {
            if user.username.trim().is_empty() {
                format!("user-{}", user.id)
            } else {
                user.username.clone()
            }
        }
        ContactDetails::Conversation { subject, users } => match subject {
            Some(subject) if !subject.is_empty() => subject.clone(),
            _ => {
                let joined = users
                    .iter()
                    .map(|user| user.username.as_str())
                    .collect::<Vec<_>>()
                    .join("_");
                if joined.is_empty() {
                    format!("conversation-{}", entry.id)
                } else {
                    joined
                }
            }
        },
        ContactDetails::Unknown => {
            error!(
                key = %entry.key,
                channel_type = ?entry.channel_type,
                "unsupported contact details variant, channel excluded from export"
            );
            return None;
        }
    };

    Some(ExportedChannel::new(entry.id, name, ChannelKind::DirectMessage))
}
