//! Runs the bundled fixtures through both subsystems.

use actor_framework::ActorClient;
use play_by_play::clients::OrderClient;
use play_by_play::config::{DeliveryPolicy, SimulatorOptions};
use play_by_play::fixtures::{self, BLUE_JAYS, BLUE_JAYS_LINEUP, DODGERS, DODGERS_LINEUP};
use play_by_play::lifecycle::{setup_tracing, DeliverySystem};
use play_by_play::model::{OrderCreate, OrderId};
use play_by_play::scorebook::{inning_summary, play_game, Half, TeamState};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    for events in fixtures::ALL_INNINGS {
        announce_inning(events);
    }

    play_fixture_game();

    info!("Starting delivery run");
    let system = DeliverySystem::new(DeliveryPolicy::default());
    for params in fixtures::demo_orders() {
        let span = tracing::info_span!("order", customer = %params.customer);
        dispatch(&system.order_client, params).instrument(span).await;
    }
    system.shutdown().await?;

    info!("All orders processed");
    Ok(())
}

fn announce_inning(events: &[&str]) {
    println!("====== Play-by-play ======");
    println!("{}", inning_summary(events));
}

fn play_fixture_game() {
    let away = TeamState::new(DODGERS, DODGERS_LINEUP.iter().copied());
    let home = TeamState::new(BLUE_JAYS, BLUE_JAYS_LINEUP.iter().copied());

    println!("\n========== Game start ==========\n");
    let game = play_game(
        away,
        home,
        &fixtures::TOP_HALVES,
        &fixtures::BOTTOM_HALVES,
        SimulatorOptions::default(),
    );

    for report in &game.halves {
        let side = match report.half {
            Half::Top => "visitors",
            Half::Bottom => "home",
        };
        println!(
            "----- {} of inning {}: {} {} batting -----",
            report.half, report.inning, side, report.team
        );
        match &report.result {
            Some(half) => println!("{}", half.summary),
            None => println!("(no events this half)"),
        }
        if report.half == Half::Bottom {
            println!();
        }
    }

    println!("========== Linescore ==========");
    println!("{}", game.linescore());
    println!("========== Game over ==========\n");
}

/// Places an order and pushes it as far along as the rules allow.
/// Every rejection is logged and the next step is still attempted.
async fn dispatch(client: &OrderClient, params: OrderCreate) {
    let id = match client.place_order(params).await {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Order could not be placed");
            return;
        }
    };

    if let Err(e) = client.accept_order(id).await {
        warn!(order_id = %id, error = %e, "Business rule violation");
    }
    if let Err(e) = client.pickup_order(id).await {
        warn!(order_id = %id, error = %e, "Pickup rejected");
    }
    if let Err(e) = client.deliver_order(id).await {
        warn!(order_id = %id, error = %e, "Delivery rejected");
    }

    let status = final_status(client, id).await;
    info!(order_id = %id, %status, "Order finished");
}

async fn final_status(client: &OrderClient, id: OrderId) -> String {
    match client.get(id).await {
        Ok(Some(order)) => order.status.to_string(),
        Ok(None) => "missing".to_string(),
        Err(e) => format!("unknown ({e})"),
    }
}
