//! # Channel Navigator
//!
//! [`Navigator`] implementation that turns navigation requests into
//! [`AppEvent::Navigate`] messages, so screen changes always happen on the UI
//! thread.
//!
//! Each navigator is bound to the mount id of the sub-form whose submission it
//! was handed to. The event handler drops the request if that sub-form is gone.

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::app::state::Screen;
use crate::core::service::Navigator;

#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    event_tx: Sender<AppEvent>,
    mount_id: u64,
}

impl ChannelNavigator {
    pub fn new(event_tx: Sender<AppEvent>, mount_id: u64) -> Self {
        Self { event_tx, mount_id }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, screen: Screen) {
        let event = AppEvent::Navigate {
            mount_id: self.mount_id,
            screen,
        };
        if let Err(e) = self.event_tx.try_send(event) {
            tracing::warn!(screen = screen.title(), error = %e, "Dropped navigation request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_channel::unbounded;

    #[test]
    fn test_navigation_is_tagged_with_mount_id() {
        let (tx, rx) = unbounded();
        ChannelNavigator::new(tx, 7).navigate(Screen::Home);

        match rx.try_recv() {
            Ok(AppEvent::Navigate { mount_id, screen }) => {
                assert_eq!(mount_id, 7);
                assert_eq!(screen, Screen::Home);
            }
            other => panic!("expected a navigation event, got {:?}", other),
        }
    }
}
