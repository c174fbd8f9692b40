use tracing::{info, warn};

use crate::{error::ServiceError, state::SharedState};

/// Periodically remind players with active games to make a move.
///
/// Runs forever on the configured interval. A failing tick is logged and the
/// job keeps going; one unreachable recipient never blocks the others.
pub async fn run(state: SharedState) {
    let mut ticker = tokio::time::interval(state.config().reminder_interval());

    loop {
        ticker.tick().await;
        match remind_active_players(&state).await {
            Ok(0) => {}
            Ok(count) => info!(count, "sent activity reminders"),
            Err(err) => warn!(error = %err, "reminder tick failed; will retry next interval"),
        }
    }
}

/// Send one reminder to every player that has a contact address and at
/// least one active game, returning how many were notified.
///
/// Delivery is a structured log line per recipient; there is no mail
/// provider behind this deployment.
pub async fn remind_active_players(state: &SharedState) -> Result<usize, ServiceError> {
    let users = state.store().list_users().await?;

    let mut notified = 0;
    for user in users {
        let Some(email) = user.email.as_deref() else {
            continue;
        };
        if user.active_games == 0 {
            continue;
        }

        info!(
            recipient = %email,
            active_games = user.active_games,
            "Hello {}, you have active games, please make a move!",
            user.name
        );
        notified += 1;
    }

    Ok(notified)
}
