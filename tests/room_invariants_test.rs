use cinema_recipe::clients::CinemaClients;
use cinema_recipe::config::CinemaConfig;
use cinema_recipe::customer::{Customer, CustomerOutcome};
use cinema_recipe::lifecycle::{Cinema, Premises};
use cinema_recipe::model::{RoomState, VisitorId};
use cinema_recipe::names::GuestNumbers;
use cinema_recipe::screening_room::Admission;
use std::collections::BTreeSet;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Watches the room for the whole day. Returns how many consistent samples were taken.
async fn sample_until_closed(clients: CinemaClients, capacity: usize) -> usize {
    let mut samples = 0;
    loop {
        let room = clients.room.snapshot().await.expect("room snapshot");
        assert!(room.occupants.len() <= capacity);

        if room.state == RoomState::Projecting {
            let members: BTreeSet<VisitorId> = clients
                .registry
                .members()
                .await
                .expect("registry listing")
                .into_iter()
                .map(|v| v.id)
                .collect();
            let again = clients.room.snapshot().await.expect("room snapshot");

            // Only trust the listing if the room did not move while we read it.
            if again.state == room.state
                && again.cycle == room.cycle
                && again.occupants == room.occupants
            {
                for visitor in room.occupants.keys() {
                    assert!(members.contains(visitor), "{visitor} seated but not registered");
                }
                samples += 1;
            }
        }

        if room.shut_for_the_day {
            return samples;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_occupants_are_always_registered_visitors() {
    let config = CinemaConfig {
        client_count: 12,
        ticket_capacity: 10,
        room_capacity: 3,
        boarding_ms: 100,
        screening_ms: 400,
        cleaning_ms: 100,
        departure_ms: 30,
        ..CinemaConfig::default()
    };
    let cinema = Cinema::open(config, &mut GuestNumbers::default())
        .await
        .unwrap();
    let sampler = tokio::spawn(sample_until_closed(cinema.clients().clone(), 3));

    let summary = cinema.run_to_completion().await.unwrap();
    let samples = sampler.await.unwrap();

    assert!(samples > 0);
    assert_eq!(summary.watched(), 10);
    assert_eq!(summary.no_ticket(), 2);
    assert_eq!(summary.operator.total_audience(), 10);
    for cycle in &summary.operator.cycles {
        assert!(cycle.audience <= 3);
    }
}

#[tokio::test]
async fn test_leave_is_idempotent() {
    let premises = Premises::open(&CinemaConfig::default()).await.unwrap();
    let room = premises.clients.room.clone();
    room.open().await.unwrap();

    let ada = premises.clients.registry.enter("Ada").await.unwrap();
    let bruno = premises.clients.registry.enter("Bruno").await.unwrap();
    assert!(matches!(
        room.enter(ada, "Ada").await.unwrap(),
        Admission::Admitted { cycle: 1, .. }
    ));
    assert!(matches!(
        room.enter(bruno, "Bruno").await.unwrap(),
        Admission::Admitted { .. }
    ));

    assert!(!room.leave(VisitorId(99)).await.unwrap());
    assert!(room.leave(ada).await.unwrap());
    assert!(!room.leave(ada).await.unwrap());

    let snapshot = room.snapshot().await.unwrap();
    assert_eq!(snapshot.occupants.len(), 1);
    assert!(snapshot.is_occupant(bruno));

    drop(room);
    premises.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_full_room_turns_customers_away() {
    let config = CinemaConfig {
        room_capacity: 1,
        ..CinemaConfig::default()
    };
    let premises = Premises::open(&config).await.unwrap();
    let room = premises.clients.room.clone();
    room.open().await.unwrap();

    assert!(matches!(
        room.enter(VisitorId(1), "Ada").await.unwrap(),
        Admission::Admitted { .. }
    ));
    assert!(matches!(
        room.enter(VisitorId(2), "Bruno").await.unwrap(),
        Admission::Rejected { state: RoomState::Open, .. }
    ));
    assert_eq!(room.snapshot().await.unwrap().occupants.len(), 1);

    drop(room);
    premises.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_snapshots_do_not_release_viewers() {
    let premises = Premises::open(&CinemaConfig::default()).await.unwrap();
    let room = premises.clients.room.clone();
    room.open().await.unwrap();

    let viewer = tokio::spawn(
        Customer::new(
            "Ada",
            premises.clients.clone(),
            Duration::from_millis(10),
            CancellationToken::new(),
        )
        .run(),
    );
    while room.snapshot().await.unwrap().occupants.is_empty() {
        tokio::task::yield_now().await;
    }
    room.start_projection().await.unwrap();

    let snapshot = room.snapshot().await.unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(!viewer.is_finished());
    assert_eq!(room.snapshot().await.unwrap(), snapshot);
    assert_eq!(snapshot.state, RoomState::Projecting);

    room.end_projection().await.unwrap();
    assert_eq!(viewer.await.unwrap(), CustomerOutcome::Watched { cycle: 1 });

    drop(room);
    premises.shutdown().await.unwrap();
}
