use std::error::Error;

use log::LevelFilter;

use pareto_hv::metrics::{HyperVolume, HyperVolumeArg, HyperVolume2D};
use pareto_hv::{compute_hypervolume, is_pareto_front};

/// This example shows how to find the non-dominated trials of a two-objective problem and
/// calculate the hyper-volume of the Pareto front.
///
/// Both objectives are minimised. The reference point is estimated from the worst value of each
/// objective plus an offset, so that every trial on the front contributes to the metric.
///
/// `cargo run --example hypervolume --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Debug).init();

    // the costs of the trials of the SCH problem f1(x) = x^2 and f2(x) = (x - 2)^2
    let costs: Vec<Vec<f64>> = (0..=20)
        .map(|i| {
            let x = -1.0 + 0.2 * i as f64;
            vec![x.powi(2), (x - 2.0).powi(2)]
        })
        .collect();

    let mask = is_pareto_front(&costs, false)?;
    for (cost, on_front) in costs.iter().zip(&mask) {
        println!("{:?} on Pareto front: {}", cost, on_front);
    }

    let ref_point = HyperVolume::estimate_reference_point(&costs, Some(vec![1.0, 1.0]))?;
    println!("Reference point is {:?}", ref_point);

    let hv = compute_hypervolume(&costs, &ref_point)?;
    println!("Hyper-volume is {}", hv);

    // the same value with the rectangle sweep, which is only available with 2 objectives
    let hv_2d = HyperVolume2D::new(&costs, &ref_point)?.compute();
    println!("Hyper-volume with the 2D sweep is {}", hv_2d);

    // a three-objective front calculated in threads
    let costs = vec![
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![0.5, 0.5, 0.5],
    ];
    let hv = HyperVolume::new(HyperVolumeArg {
        parallel: Some(true),
        check_reference_point: None,
    });
    println!("3D hyper-volume is {}", hv.compute(&costs, &[2.0, 2.0, 2.0])?);

    #[cfg(feature = "plot")]
    pareto_hv::utils::plot_front(&costs, "pareto_front_3d.png")?;

    Ok(())
}
