pub use export::{read_json_file, read_json_files, CostSetExport};
pub use hypervolume::{
    compute_hypervolume, AllHyperVolumeFileData, HyperVolume, HyperVolumeArg, HyperVolumeFileData,
};
pub use hypervolume_2d::HyperVolume2D;

mod export;
mod hypervolume;
mod hypervolume_2d;
