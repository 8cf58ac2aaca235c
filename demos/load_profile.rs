/// Walks a vehicle through a random sequence of stops and prints the load
/// carried at every step.
///
/// Run with: RUST_LOG=amount=trace cargo run --example load_profile
use amount::{Amount, Job, LoadProfile};
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

const NUM_STOPS: usize = 8;
const DIMENSIONS: usize = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Load Profile ===\n");

    let mut rng = StdRng::seed_from_u64(2024);
    let capacity = Amount::from([60, 40, 10]);
    let zero = capacity.zeroed();

    let mut jobs = Vec::with_capacity(NUM_STOPS + 2);
    for _ in 0..NUM_STOPS {
        let demand = random_demand(&mut rng);
        if rng.random_bool(0.5) {
            jobs.push(Job::single(demand, zero.clone()));
        } else {
            jobs.push(Job::single(zero.clone(), demand));
        }
    }

    // One shipment travelling between the second and the second to last stop.
    let shipment = random_demand(&mut rng);
    jobs.insert(1, Job::shipment_pickup(shipment.clone()));
    jobs.insert(jobs.len() - 1, Job::shipment_delivery(shipment));

    let mut profile = LoadProfile::new(capacity.clone());
    if let Err(err) = profile.update(&jobs) {
        eprintln!("Failed to compute loads: {err}");
        std::process::exit(1);
    }

    println!("Capacity:        {}", capacity);
    println!("Start load:      {}", profile.load_at_step(0));
    for (rank, job) in jobs.iter().enumerate() {
        println!(
            "Stop {:>2} {:<17} +{} -{} -> {}",
            rank,
            format!("{:?}", job.kind()),
            job.pickup(),
            job.delivery(),
            profile.load_at_step(rank + 1)
        );
    }
    println!();
    println!("Max load:        {}", profile.max_load());
    println!("Delivery margin: {}", profile.delivery_margin());
    println!("Pickup margin:   {}", profile.pickup_margin());
    println!(
        "Within capacity: {}",
        profile.max_load().dominated_by(&capacity)
    );
}

fn random_demand(rng: &mut StdRng) -> Amount {
    (0..DIMENSIONS).map(|_| rng.random_range(0..8)).collect()
}
