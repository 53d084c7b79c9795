use std::env;
use std::error::Error;
use std::fs;

use log::LevelFilter;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use pareto_hv::metrics::{read_json_files, CostSetExport, HyperVolume, HyperVolumeArg};

/// This example shows how to track the convergence of an optimisation run by calculating the
/// hyper-volume of snapshots of its trials.
///
/// A dummy run samples 3 random trials per generation for the ZDT1 front shifted away from its
/// optimum by a distance decreasing with the generation number. The costs collected so far are
/// exported to a JSON file every 10 generations; the files are then read back and the
/// hyper-volume is calculated for each snapshot.
///
/// `cargo run --example convergence --release`
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let out_path = env::temp_dir().join("pareto_hv_convergence");
    fs::create_dir_all(&out_path)?;

    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let mut costs: Vec<Vec<f64>> = Vec::new();
    for generation in 1..=50 {
        let distance = 1.0 / generation as f64;
        for _ in 0..3 {
            let f1: f64 = rng.gen();
            let f2 = 1.0 - f1.sqrt();
            costs.push(vec![f1 + distance, f2 + distance]);
        }
        if generation % 10 == 0 {
            CostSetExport::new("ZDT1", generation, costs.clone())?.save_to_json(&out_path)?;
        }
    }

    let snapshots = read_json_files(&out_path)?;
    let hv = HyperVolume::new(HyperVolumeArg {
        parallel: Some(true),
        check_reference_point: None,
    });
    let hvs = hv.from_files(&snapshots, &[3.0, 3.0])?;
    println!("Hyper-volumes generations: {:?}", hvs.generations());
    println!("Hyper-volumes values: {:?}", hvs.values());

    Ok(())
}
