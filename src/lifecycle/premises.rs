use super::{Category, CinemaError};
use crate::clients::{CinemaClients, RegistryClient, ScreeningRoomClient, TicketBoothClient};
use crate::config::CinemaConfig;
use crate::screening_room::RoomSignals;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The three shared resources, each running in its own actor.
///
/// Actors stop once every clone of [`Premises::clients`] is dropped, so anything
/// still holding a client keeps them alive through [`shutdown`](Premises::shutdown).
pub struct Premises {
    pub clients: CinemaClients,
    handles: Vec<JoinHandle<()>>,
}

impl Premises {
    /// Spawns the registry, booth and room actors and installs one booth and one room.
    pub async fn open(config: &CinemaConfig) -> Result<Self, CinemaError> {
        config.validate()?;

        // No actor depends on another; the room's context is its waiter groups
        let (registry_actor, registry_client) = crate::registry::new(config.mailbox_size);
        let (booth_actor, booth_client) = crate::ticket_booth::new(config.mailbox_size);
        let (room_actor, room_client) = crate::screening_room::new(config.mailbox_size);

        let handles = vec![
            tokio::spawn(registry_actor.run(())),
            tokio::spawn(booth_actor.run(())),
            tokio::spawn(room_actor.run(RoomSignals::new())),
        ];

        let booth = TicketBoothClient::install(booth_client, config.ticket_capacity)
            .await
            .map_err(|e| CinemaError::Startup(e.to_string()))?;
        let room = ScreeningRoomClient::install(room_client, config.room_capacity)
            .await
            .map_err(|e| CinemaError::Startup(e.to_string()))?;
        info!(category = %Category::Cinema, "{} tickets for today", config.ticket_capacity);

        Ok(Self {
            clients: CinemaClients {
                registry: RegistryClient::new(registry_client),
                booth,
                room,
            },
            handles,
        })
    }

    /// Kills the room actor outright, dropping its waiter groups with it.
    #[cfg(test)]
    pub(crate) fn abort_room(&self) {
        if let Some(room) = self.handles.get(2) {
            room.abort();
        }
    }

    /// Drops the clients and waits for every actor to drain its mailbox.
    pub async fn shutdown(self) -> Result<(), CinemaError> {
        drop(self.clients);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(category = %Category::Cinema, "Actor task failed: {:?}", e);
                return Err(CinemaError::TaskFailed(format!("Actor task failed: {:?}", e)));
            }
        }
        Ok(())
    }
}
